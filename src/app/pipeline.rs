//! Schema resolution pipeline: from flags or a saved config to running mock servers.
//!
//! Every step blocks on the previous one. The run-control file and
//! `.gitignore` are only written once a complete [`RunConfig`] exists.

use std::path::Path;

use tracing::{debug, info, warn};

use super::AppContext;
use crate::domain::{AppError, OasFile, Origin, RunConfig, Schema, messages, validate_origin};
use crate::ports::{GitPort, MockServer, MockServerFactory, PrompterPort, SchemaDiscoveryPort};
use crate::services::{ask_for_ports, assign_ports, repository_acquirer};

/// Command-line inputs that steer the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub origin: Option<String>,
    pub schema_paths: Vec<String>,
    pub ports: Vec<String>,
    pub run_config: bool,
}

/// Entry point chosen for a run. First match wins, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFlow {
    /// Reuse the run-control file verbatim.
    SavedConfig,
    /// Discover schemas from the origin given on the command line.
    OriginFlag,
    /// Use the schema paths given on the command line, no discovery.
    SchemaPathsFlag,
    /// Ask for everything. `offer_saved` first offers an existing run-control file.
    FreshInteractive { offer_saved: bool },
}

impl EntryFlow {
    pub fn select(options: &RunOptions, rc_file_exists: bool) -> Self {
        if options.run_config {
            if rc_file_exists {
                EntryFlow::SavedConfig
            } else {
                EntryFlow::FreshInteractive { offer_saved: false }
            }
        } else if options.origin.as_deref().is_some_and(|origin| !origin.is_empty()) {
            EntryFlow::OriginFlag
        } else if !options.schema_paths.is_empty() {
            EntryFlow::SchemaPathsFlag
        } else {
            EntryFlow::FreshInteractive { offer_saved: rc_file_exists }
        }
    }
}

type Ctx<G, P, D, M> = AppContext<G, P, D, M>;

/// Resolve the config for this run, then start a mock server per schema.
pub fn run<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    options: &RunOptions,
) -> Result<Vec<M::Server>, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let config = resolve_config(ctx, options)?;
    start_mock_servers(ctx.mock_servers(), &config.selected_schemas)
}

pub fn resolve_config<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    options: &RunOptions,
) -> Result<RunConfig, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let store = ctx.config_store();
    let flow = EntryFlow::select(options, store.exists());
    debug!(?flow, "selected entry flow");

    match flow {
        EntryFlow::SavedConfig => match store.load() {
            Some(config) => {
                print_config(messages::USING_PROVIDED_CONFIG, &config)?;
                Ok(config)
            }
            None => init(ctx, None, &[], &[]),
        },
        EntryFlow::OriginFlag => {
            init(ctx, options.origin.as_deref(), &options.schema_paths, &options.ports)
        }
        EntryFlow::SchemaPathsFlag => {
            init_with_schema_paths(ctx, &options.schema_paths, &options.ports)
        }
        EntryFlow::FreshInteractive { offer_saved: true } => init_with_config_file(ctx),
        EntryFlow::FreshInteractive { offer_saved: false } => {
            if options.run_config {
                warn!("{} {}", messages::CONFIG_FILE_NOT_FOUND, ctx.settings().rc_file_name);
            }
            init(ctx, None, &[], &[])
        }
    }
}

/// Offer the saved config for reuse; fall back to a fresh run.
fn init_with_config_file<G, P, D, M>(ctx: &Ctx<G, P, D, M>) -> Result<RunConfig, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let Some(existing) = ctx.config_store().load() else {
        return init(ctx, None, &[], &[]);
    };
    print_config(messages::CURRENT_CONFIG, &existing)?;
    if ctx.prompter().confirm(messages::CONFIRM_EXISTING_CONFIG)? {
        Ok(existing)
    } else {
        init(ctx, None, &[], &[])
    }
}

/// Discover schemas from an origin (asked for when absent), select them and assign ports.
fn init<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    origin: Option<&str>,
    schema_paths: &[String],
    ports: &[String],
) -> Result<RunConfig, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let origin = match origin {
        Some(value) => Origin::resolve(value, ctx.settings().working_dir()),
        None => prompt_origin(ctx)?,
    };

    let schemas = get_schemas(ctx, &origin)?;
    if schemas.is_empty() {
        return Err(AppError::OpenApiSchemaNotFound);
    }

    let to_mock = select_schemas(ctx, &schemas, schema_paths)?;
    let selected = if ports.is_empty() {
        ask_for_ports(ctx.prompter(), &to_mock, ctx.settings().default_port)?
    } else {
        assign_ports(&to_mock, ports, ctx.settings().default_port)?
    };

    let config = RunConfig::new(Some(origin.to_string()), selected);
    save_runtime_config(ctx, &config)?;
    Ok(config)
}

/// Pair explicitly given schema paths with ports; no discovery.
fn init_with_schema_paths<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    schema_paths: &[String],
    ports: &[String],
) -> Result<RunConfig, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let selected = if ports.is_empty() {
        ask_for_ports(ctx.prompter(), schema_paths, ctx.settings().default_port)?
    } else {
        assign_ports(schema_paths, ports, ctx.settings().default_port)?
    };

    let config = RunConfig::new(None, selected);
    save_runtime_config(ctx, &config)?;
    Ok(config)
}

fn prompt_origin<G, P, D, M>(ctx: &Ctx<G, P, D, M>) -> Result<Origin, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let working_dir = ctx.settings().working_dir();
    let validate = |value: &str| {
        if !value.is_empty() && working_dir.join(value).exists() {
            Ok(())
        } else {
            validate_origin(value)
        }
    };
    let answer = ctx.prompter().input(messages::INPUT_ORIGIN, None, &validate)?;
    Ok(Origin::resolve(&answer, working_dir))
}

/// Clone remote origins into the scratch directory, then discover OpenAPI documents.
///
/// Clones are walked recursively; local origins are scanned one level deep.
pub fn get_schemas<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    origin: &Origin,
) -> Result<Vec<OasFile>, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    match origin {
        Origin::Remote(url) => {
            let scratch_dir = ctx.settings().scratch_dir();
            repository_acquirer::acquire(ctx.git(), url, &scratch_dir)?;
            ctx.gitignore().add_entry(ctx.prompter(), &ctx.settings().scratch_gitignore_entry())?;
            ctx.discovery().scan_recursive(&scratch_dir)
        }
        Origin::Local(path) => ctx.discovery().scan(path),
    }
}

fn select_schemas<G, P, D, M>(
    ctx: &Ctx<G, P, D, M>,
    schemas: &[OasFile],
    requested: &[String],
) -> Result<Vec<String>, AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let working_dir = ctx.settings().working_dir();
    if !requested.is_empty() {
        let all_found = requested
            .iter()
            .all(|path| schemas.iter().any(|schema| is_same_file(schema, path, working_dir)));
        if all_found {
            return Ok(requested.to_vec());
        }
        debug!(?requested, "requested schema paths not all discovered; asking for a selection");
    }

    let items: Vec<String> = schemas.iter().map(OasFile::file_path_string).collect();
    loop {
        let chosen = ctx.prompter().multi_select(messages::CHOOSE_FILES, &items)?;
        if !chosen.is_empty() {
            return Ok(chosen.into_iter().filter_map(|i| items.get(i).cloned()).collect());
        }
        warn!("{}", messages::SELECT_AT_LEAST_ONE);
    }
}

fn is_same_file(schema: &OasFile, requested: &str, working_dir: &Path) -> bool {
    let candidate = working_dir.join(requested);
    if schema.file_path == candidate {
        return true;
    }
    match (candidate.canonicalize(), schema.file_path.canonicalize()) {
        (Ok(candidate), Ok(discovered)) => candidate == discovered,
        _ => false,
    }
}

/// Persist `config`, show it, and offer to ignore the run-control file.
fn save_runtime_config<G, P, D, M>(ctx: &Ctx<G, P, D, M>, config: &RunConfig) -> Result<(), AppError>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    let rc_file_name = &ctx.settings().rc_file_name;
    ctx.config_store().save(config)?;
    print_config(&messages::saved_config(rc_file_name), config)?;
    ctx.gitignore().add_entry(ctx.prompter(), rc_file_name)?;
    Ok(())
}

fn print_config(header: &str, config: &RunConfig) -> Result<(), AppError> {
    info!("{}", header);
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

/// Validate and start a server for each schema, in order.
///
/// If any schema fails, the servers already started are stopped before the
/// error is returned.
pub fn start_mock_servers<M: MockServerFactory>(
    factory: &M,
    schemas: &[Schema],
) -> Result<Vec<M::Server>, AppError> {
    let mut servers = Vec::with_capacity(schemas.len());
    for schema in schemas {
        let mut server = factory.create(schema);
        let started = server.validate().and_then(|()| server.mock());
        if let Err(err) = started {
            stop_mock_servers(&mut servers);
            return Err(err);
        }
        // Separate each server's output.
        println!();
        servers.push(server);
    }
    Ok(servers)
}

fn stop_mock_servers<S: MockServer>(servers: &mut [S]) {
    for server in servers.iter_mut().rev() {
        if let Err(err) = server.stop() {
            warn!("Failed to stop mock server: {}", err);
        }
    }
}
