//! CLI Adapter.

use std::env;
use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::AppContext;
use super::pipeline::{self, RunOptions};
use crate::adapters::{DialoguerPrompter, GitCommandAdapter, ProcessMockServerFactory};
use crate::domain::{AppError, RunnerSettings};
use crate::services::FilesystemDiscovery;

#[derive(Parser, Debug)]
#[command(name = "api-mock-runner")]
#[command(version)]
#[command(
    about = "Resolve OpenAPI schemas from a folder or git repository and serve them with a mock server",
    long_about = None
)]
struct Cli {
    /// Path or repository containing schemas
    #[arg(short = 'o', long)]
    origin: Option<String>,
    /// Paths to schemas
    #[arg(short = 's', long = "schema", num_args = 1..)]
    schema: Vec<String>,
    /// Port to serve each schema
    #[arg(short = 'p', long = "port", num_args = 1..)]
    port: Vec<String>,
    /// Use saved config
    #[arg(short = 'r', long)]
    run_config: bool,
    /// Log debug output
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            origin: cli.origin,
            schema_paths: cli.schema,
            ports: cli.port,
            run_config: cli.run_config,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli.into()) {
        report(&e);
        std::process::exit(1);
    }
}

fn execute(options: RunOptions) -> Result<(), AppError> {
    let settings = RunnerSettings::from_env(env::current_dir()?);
    let mock_servers = ProcessMockServerFactory::new(settings.mock_command.clone());
    let ctx = AppContext::new(
        settings,
        GitCommandAdapter::new(),
        DialoguerPrompter::new(),
        FilesystemDiscovery::new(),
        mock_servers,
    );

    let mut servers = pipeline::run(&ctx, &options)?;
    for server in &mut servers {
        server.wait()?;
    }
    Ok(())
}

fn report(e: &AppError) {
    eprintln!("Error: {} (severity: {}, emitter: {})", e, e.severity(), e.emitter());
}
