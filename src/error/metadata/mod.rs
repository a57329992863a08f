pub(crate) mod code;
mod suggestion;

pub use code::Code as LanderErrorCode;
pub use suggestion::Suggestion as LanderErrorSuggestion;

use crate::project::ProjectError;
use crate::runner::EngineError;

use code::Code;
use suggestion::Suggestion;

/// Metadata contains extra information about specific errors:
/// an optional error `Code` and an optional `Suggestion`.
#[derive(Default, Debug)]
pub struct LanderErrorMetadata {
    pub suggestion: Option<Suggestion>,
    pub code: Option<Code>,
}

/// `LanderErrorMetadata` structs can be created from an `anyhow::Error`.
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable.
impl From<&mut anyhow::Error> for LanderErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(project_error) = error.downcast_ref::<ProjectError>() {
            let (suggestion, code) = match project_error {
                ProjectError::ManifestNotFound { .. } => {
                    (Some(Suggestion::RunFromProjectRoot), Some(Code::E001))
                }
                ProjectError::ManifestUnreadable { .. } => (None, Some(Code::E002)),
                ProjectError::MissingProjectType { .. } => {
                    (Some(Suggestion::FixManifest), Some(Code::E003))
                }
                ProjectError::UnknownProjectType { .. } => {
                    (Some(Suggestion::FixManifest), Some(Code::E004))
                }
                ProjectError::ConfigUnreadable { .. } => (None, Some(Code::E005)),
                ProjectError::InvalidConfig { .. } => {
                    (Some(Suggestion::CheckProjectConfig), Some(Code::E006))
                }
            };
            return LanderErrorMetadata { suggestion, code };
        }

        if let Some(engine_error) = error.downcast_ref::<EngineError>() {
            let (suggestion, code) = match engine_error {
                EngineError::BinaryNotFound(_) => {
                    (Some(Suggestion::InstallEngine), Some(Code::E007))
                }
                EngineError::NonUnicodePath { .. } => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E008))
                }
                EngineError::Spawn { .. } => (Some(Suggestion::InstallEngine), Some(Code::E009)),
                EngineError::MalformedResult => (Some(Suggestion::SubmitIssue), Some(Code::E010)),
                EngineError::ReportedFailure => {
                    (Some(Suggestion::RerunWithDebugLog), Some(Code::E011))
                }
            };
            return LanderErrorMetadata { suggestion, code };
        }

        LanderErrorMetadata::default()
    }
}
