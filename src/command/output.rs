use lander_std::successln;

use crate::project::ProjectKind;

/// LanderOutput defines all of the different types of data that are printed
/// when a command finishes. Every one of Lander's commands should return
/// `LanderResult<LanderOutput>`, and the print logic for each variant is
/// handled in `LanderOutput::print`.
///
/// A command that finishes without anything to report should return a
/// variant that prints nothing rather than printing on its own.
#[derive(Clone, Debug, PartialEq)]
pub enum LanderOutput {
    DeploySuccess { kind: ProjectKind },
    DeployCancelled,
}

impl LanderOutput {
    pub fn print(&self) {
        match self {
            LanderOutput::DeploySuccess { kind } => {
                successln!("Deployed the {}.", kind);
            }
            // dismissing a prompt is an expected early exit, not news
            LanderOutput::DeployCancelled => (),
        }
    }
}
