mod fake_git;
mod recording_mock_server;
mod scripted_prompter;
mod spy_discovery;

pub use fake_git::FakeGit;
pub use recording_mock_server::RecordingMockServerFactory;
pub use scripted_prompter::ScriptedPrompter;
pub use spy_discovery::SpyDiscovery;
