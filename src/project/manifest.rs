use std::fmt::{self, Display};
use std::fs;

use camino::Utf8PathBuf;
use regex::Regex;
use serde::Serialize;

use super::ProjectError;

/// File that marks the root of a deployable project.
pub const MANIFEST_FILE: &str = "manifest.xml";

const PROJECT_TYPE_ACCOUNT_CUSTOMIZATION: &str = "ACCOUNTCUSTOMIZATION";
const PROJECT_TYPE_SUITEAPP: &str = "SUITEAPP";

/// Classification of a deployable project, read once per invocation from the
/// project manifest and immutable afterwards. The kind decides which deploy
/// option is relevant, so everything downstream branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectKind {
    AccountCustomization,
    SuiteApp,
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let readable = match self {
            ProjectKind::AccountCustomization => "account customization project",
            ProjectKind::SuiteApp => "SuiteApp project",
        };
        write!(f, "{}", readable)
    }
}

/// Reads project classification out of the manifest in a project folder.
pub struct ProjectInfo {
    project_dir: Utf8PathBuf,
}

impl ProjectInfo {
    pub fn new(project_dir: Utf8PathBuf) -> Self {
        Self { project_dir }
    }

    /// Classifies the project from the `projecttype` attribute of its
    /// manifest. Anything other than the two known project types is an
    /// error here, so later stages only ever see a valid classification.
    pub fn kind(&self) -> Result<ProjectKind, ProjectError> {
        let path = self.project_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(ProjectError::ManifestNotFound {
                path: self.project_dir.clone(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| {
            ProjectError::ManifestUnreadable {
                path: path.clone(),
                source,
            }
        })?;

        match project_type_attribute(&contents) {
            Some(value) => match value.as_str() {
                PROJECT_TYPE_ACCOUNT_CUSTOMIZATION => Ok(ProjectKind::AccountCustomization),
                PROJECT_TYPE_SUITEAPP => Ok(ProjectKind::SuiteApp),
                _ => Err(ProjectError::UnknownProjectType { path, value }),
            },
            None => Err(ProjectError::MissingProjectType { path }),
        }
    }
}

fn project_type_attribute(manifest: &str) -> Option<String> {
    let attribute =
        Regex::new(r#"projecttype\s*=\s*"([^"]*)""#).expect("hardcoded pattern compiles");
    attribute
        .captures(manifest)
        .map(|captures| captures[1].to_string())
}
