use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use super::ProjectError;

/// Optional per-repository configuration file.
pub const CONFIG_FILE: &str = "lander.toml";

/// Configuration loaded from `lander.toml` next to where the command runs.
///
/// Repositories that keep the deployable project in a subdirectory point
/// `project-folder` at it; everyone else deploys the invocation directory.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
    #[serde(default)]
    project_folder: Option<Utf8PathBuf>,
}

impl ProjectConfig {
    /// Loads the config file from `dir`, if one exists.
    pub fn load(dir: &Utf8Path) -> Result<Self, ProjectError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(&path).map_err(|source| ProjectError::ConfigUnreadable {
                path: path.clone(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| ProjectError::InvalidConfig { path, source })
    }

    /// The directory expected to contain the project manifest: the configured
    /// project folder resolved against `dir`, or `dir` itself.
    pub fn project_dir(&self, dir: &Utf8Path) -> Utf8PathBuf {
        match &self.project_folder {
            Some(folder) if folder.is_absolute() => folder.clone(),
            Some(folder) => dir.join(folder),
            None => dir.to_owned(),
        }
    }
}
