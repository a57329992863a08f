mod config;
mod manifest;

pub use config::ProjectConfig;
pub use manifest::{MANIFEST_FILE, ProjectInfo, ProjectKind};

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures while resolving what kind of project lives at a path.
///
/// Every variant is terminal for the invocation that hits it: classification
/// happens before any work is submitted, so these never leave anything
/// half-done behind.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no deployable project found at `{path}` (missing {MANIFEST_FILE})")]
    ManifestNotFound { path: Utf8PathBuf },

    #[error("could not read `{path}`")]
    ManifestUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{path}` does not declare a project type")]
    MissingProjectType { path: Utf8PathBuf },

    #[error("unknown project type `{value}` in `{path}`")]
    UnknownProjectType { path: Utf8PathBuf, value: String },

    #[error("could not read `{path}`")]
    ConfigUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse `{path}`")]
    InvalidConfig {
        path: Utf8PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
