pub mod dialoguer_prompter;
pub mod git_command;
pub mod mock_server_process;

pub use dialoguer_prompter::DialoguerPrompter;
pub use git_command::GitCommandAdapter;
pub use mock_server_process::{ProcessMockServer, ProcessMockServerFactory};
