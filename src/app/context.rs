use crate::domain::RunnerSettings;
use crate::ports::{GitPort, MockServerFactory, PrompterPort, SchemaDiscoveryPort};
use crate::services::{ConfigStore, GitignoreGuard};

/// Application context holding dependencies for a pipeline run.
pub struct AppContext<G, P, D, M>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    settings: RunnerSettings,
    git: G,
    prompter: P,
    discovery: D,
    mock_servers: M,
}

impl<G, P, D, M> AppContext<G, P, D, M>
where
    G: GitPort,
    P: PrompterPort,
    D: SchemaDiscoveryPort,
    M: MockServerFactory,
{
    /// Create a new application context.
    pub fn new(settings: RunnerSettings, git: G, prompter: P, discovery: D, mock_servers: M) -> Self {
        Self { settings, git, prompter, discovery, mock_servers }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn discovery(&self) -> &D {
        &self.discovery
    }

    pub fn mock_servers(&self) -> &M {
        &self.mock_servers
    }

    /// Store for the run-control file in the working directory.
    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::new(self.settings.rc_file_path())
    }

    /// Guard for the working directory's `.gitignore`.
    pub fn gitignore(&self) -> GitignoreGuard {
        GitignoreGuard::new(self.settings.gitignore_path())
    }
}
