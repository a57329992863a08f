mod engine;

pub use engine::{
    ActionResult, ActionStatus, CommandAction, DEFAULT_ENGINE_BIN, EngineCli, EngineError,
    ExecuteAction,
};

#[cfg(test)]
pub use engine::MockExecuteAction;

use std::collections::BTreeMap;

use camino::Utf8PathBuf;

use crate::options::{AccountSpecificValues, DeployOptions};

/// Engine action name for a guided deploy.
pub const DEPLOY_ACTION: &str = "project:deploy";

// Wire-level option contract with the engine. The string conventions
// (uppercase values, truthiness through emptiness) stay confined to this
// module; the rest of the crate works with `DeployOptions`.
const ACCOUNT_SPECIFIC_VALUES_KEY: &str = "accountspecificvalues";
const ACCOUNT_SPECIFIC_VALUES_ERROR: &str = "ERROR";
const ACCOUNT_SPECIFIC_VALUES_WARNING: &str = "WARNING";
const APPLY_INSTALLATION_PREFS_KEY: &str = "applycontentprotection";
// the engine reads this flag as truthy iff the string is non-empty
const APPLY_INSTALLATION_PREFS_ON: &str = "T";
const APPLY_INSTALLATION_PREFS_OFF: &str = "";

/// Builds the engine action for one deploy. The resulting mapping carries
/// exactly the option key belonging to the project kind that produced
/// `options`, and nothing else.
pub fn deploy_action(project_dir: Utf8PathBuf, options: &DeployOptions) -> CommandAction {
    CommandAction {
        name: DEPLOY_ACTION.to_string(),
        project_dir,
        options: flatten(options),
        interactive: false,
    }
}

fn flatten(options: &DeployOptions) -> BTreeMap<String, String> {
    let mut flattened = BTreeMap::new();
    match options {
        DeployOptions::AccountCustomization {
            account_specific_values,
        } => {
            let value = match account_specific_values {
                AccountSpecificValues::Error => ACCOUNT_SPECIFIC_VALUES_ERROR,
                AccountSpecificValues::Warning => ACCOUNT_SPECIFIC_VALUES_WARNING,
            };
            flattened.insert(ACCOUNT_SPECIFIC_VALUES_KEY.to_string(), value.to_string());
        }
        DeployOptions::SuiteApp {
            apply_installation_prefs,
        } => {
            let value = if *apply_installation_prefs {
                APPLY_INSTALLATION_PREFS_ON
            } else {
                APPLY_INSTALLATION_PREFS_OFF
            };
            flattened.insert(APPLY_INSTALLATION_PREFS_KEY.to_string(), value.to_string());
        }
    }
    flattened
}

/// Presents a uniform submission contract over the engine.
pub struct CommandRunner<E> {
    engine: E,
}

impl<E: ExecuteAction> CommandRunner<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Submits an action to the engine. The guided flow has already resolved
    /// every interactive decision, so interactive mode is forced off no
    /// matter what the caller built; the engine must never prompt again.
    pub async fn run(&self, mut action: CommandAction) -> Result<ActionResult, EngineError> {
        action.interactive = false;
        self.engine.execute_action(action).await
    }
}
