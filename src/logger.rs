//! Formats the traces, events, and spans `lander` and its libraries produce.

use std::io;

use tracing_subscriber::fmt;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber for everything the application
/// and its libraries log. Without a level, no logs are printed.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        let format = fmt::format().without_time().pretty();
        fmt()
            .with_max_level(level)
            .event_format(format)
            .with_writer(io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tracing_core::metadata::ParseLevelError;

    use super::{Level, LEVELS};

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }
}
