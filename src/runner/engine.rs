use std::collections::BTreeMap;

use async_trait::async_trait;
use camino::Utf8PathBuf;
use serde::Deserialize;
use thiserror::Error;
use tokio::process::Command;

/// Engine CLI looked up on $PATH when no override is configured.
pub const DEFAULT_ENGINE_BIN: &str = "suitecloud";

/// One fully resolved engine invocation: every decision the engine would
/// otherwise prompt for is already answered in `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAction {
    pub name: String,
    pub project_dir: Utf8PathBuf,
    pub options: BTreeMap<String, String>,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "ERROR")]
    Error,
}

/// Outcome payload owned by the engine. Lander reads the status tag and
/// carries the rest along untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionResult {
    pub status: ActionStatus,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not find the `{DEFAULT_ENGINE_BIN}` engine on this system")]
    BinaryNotFound(#[source] which::Error),

    #[error("the engine path `{path}` is not valid UTF-8")]
    NonUnicodePath { path: String },

    #[error("could not launch the engine at `{bin}`")]
    Spawn {
        bin: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the engine finished without a readable result")]
    MalformedResult,

    #[error("the engine reported a failed deployment")]
    ReportedFailure,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecuteAction {
    async fn execute_action(&self, action: CommandAction) -> Result<ActionResult, EngineError>;
}

/// Engine implementation that shells out to the platform CLI and reads the
/// result object it prints on stdout.
pub struct EngineCli {
    bin_override: Option<Utf8PathBuf>,
}

impl EngineCli {
    pub fn new(bin_override: Option<Utf8PathBuf>) -> Self {
        Self { bin_override }
    }

    fn locate(&self) -> Result<Utf8PathBuf, EngineError> {
        if let Some(bin) = &self.bin_override {
            return Ok(bin.clone());
        }
        let found = which::which(DEFAULT_ENGINE_BIN).map_err(EngineError::BinaryNotFound)?;
        Utf8PathBuf::from_path_buf(found).map_err(|path| EngineError::NonUnicodePath {
            path: path.display().to_string(),
        })
    }

    fn argv(action: &CommandAction) -> Vec<String> {
        let mut argv = vec![action.name.clone()];
        for (key, value) in &action.options {
            argv.push(format!("--{}", key));
            argv.push(value.clone());
        }
        if action.interactive {
            argv.push("-i".to_string());
        }
        argv
    }

    // The engine logs freely on stdout; its machine-readable result is the
    // last line that parses as a result object.
    fn parse_result(stdout: &str) -> Result<ActionResult, EngineError> {
        stdout
            .lines()
            .rev()
            .find_map(|line| serde_json::from_str::<ActionResult>(line.trim()).ok())
            .ok_or(EngineError::MalformedResult)
    }
}

#[async_trait]
impl ExecuteAction for EngineCli {
    async fn execute_action(&self, action: CommandAction) -> Result<ActionResult, EngineError> {
        let bin = self.locate()?;
        let argv = Self::argv(&action);
        tracing::debug!(%bin, ?argv, "running engine command");

        let output = Command::new(&bin)
            .args(&argv)
            .current_dir(&action.project_dir)
            .output()
            .await
            .map_err(|source| EngineError::Spawn {
                bin: bin.clone(),
                source,
            })?;

        tracing::debug!(
            engine_stderr = %String::from_utf8_lossy(&output.stderr),
            engine_exit = ?output.status.code(),
        );

        Self::parse_result(&String::from_utf8_lossy(&output.stdout))
    }
}
