pub mod cli;
mod command;
mod error;
mod logger;
mod options;
mod project;
mod runner;
mod utils;

pub use command::LanderOutput;
pub use error::{LanderError, LanderErrorCode, LanderErrorSuggestion, LanderResult};
