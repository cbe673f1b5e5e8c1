pub mod config_store;
pub mod gitignore;
pub mod oas_discovery;
pub mod port_allocator;
pub mod repository_acquirer;

pub use config_store::ConfigStore;
pub use gitignore::GitignoreGuard;
pub use oas_discovery::FilesystemDiscovery;
pub use port_allocator::{ask_for_ports, assign_ports};
