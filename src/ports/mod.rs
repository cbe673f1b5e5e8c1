mod git;
mod mock_server;
mod prompter;
mod schema_discovery;

pub use git::GitPort;
pub use mock_server::{MockServer, MockServerFactory};
pub use prompter::{InputValidator, PrompterPort};
pub use schema_discovery::SchemaDiscoveryPort;
