pub mod cli;
mod context;
pub mod pipeline;

pub use context::AppContext;
pub use pipeline::{EntryFlow, RunOptions};
