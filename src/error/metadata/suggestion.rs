use std::fmt::{self, Display};

use lander_std::Style;

use crate::project::MANIFEST_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    RunFromProjectRoot,
    FixManifest,
    CheckProjectConfig,
    InstallEngine,
    RerunWithDebugLog,
    SubmitIssue,
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::RunFromProjectRoot => {
                format!(
                    "Run this command from a directory containing {}, or point {} at one.",
                    Style::Path.paint(MANIFEST_FILE),
                    Style::Command.paint("--dir")
                )
            }
            Suggestion::FixManifest => {
                format!(
                    "Check the {} attribute in your project's {}.",
                    Style::Command.paint("projecttype"),
                    Style::Path.paint(MANIFEST_FILE)
                )
            }
            Suggestion::CheckProjectConfig => {
                format!(
                    "Fix your {} or remove it to deploy from the invocation directory.",
                    Style::Path.paint("lander.toml")
                )
            }
            Suggestion::InstallEngine => {
                format!(
                    "Install the platform CLI, or set {} to the binary you want lander to use.",
                    Style::Command.paint("$LANDER_ENGINE_BIN")
                )
            }
            Suggestion::RerunWithDebugLog => {
                format!(
                    "Re-run this command with {} to see the engine's output.",
                    Style::Command.paint("--log debug")
                )
            }
            Suggestion::SubmitIssue => {
                format!("This error was unexpected! Please submit an issue with any relevant details about what you were trying to do: {}", Style::Command.paint("https://github.com/lander-cli/lander/issues/new"))
            }
        };
        write!(formatter, "{}", &suggestion)
    }
}
