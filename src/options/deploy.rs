use std::fmt::{self, Display};

use clap::{Parser, ValueEnum};
use console::Term;
use dialoguer::Select;
use serde::Serialize;

use crate::LanderResult;

/// How the engine should treat account-specific values that may not be valid
/// for the target account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum AccountSpecificValues {
    /// Stop the deployment when a conflict is found.
    Error,
    /// Deploy anyway and report each conflict as a warning.
    Warning,
}

impl Display for AccountSpecificValues {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let readable = match self {
            AccountSpecificValues::Error => {
                "Cancel the deployment if an account-specific value conflict is found"
            }
            AccountSpecificValues::Warning => "Deploy anyway and display a warning per conflict",
        };
        write!(f, "{}", readable)
    }
}

#[derive(Debug, Clone, Serialize, Parser, Default)]
pub struct AccountSpecificValuesOpt {
    /// How to handle account-specific value conflicts (skips the prompt)
    #[arg(long = "account-specific-values", value_enum)]
    account_specific_values: Option<AccountSpecificValues>,
}

impl AccountSpecificValuesOpt {
    pub fn preset(&self) -> Option<AccountSpecificValues> {
        self.account_specific_values
    }
}

#[derive(Debug, Clone, Serialize, Parser, Default)]
pub struct ApplyInstallationPrefsOpt {
    /// Whether to apply the SuiteApp's installation preferences (skips the prompt)
    #[arg(long = "apply-installation-prefs", value_name = "BOOL")]
    apply_installation_prefs: Option<bool>,
}

impl ApplyInstallationPrefsOpt {
    pub fn preset(&self) -> Option<bool> {
        self.apply_installation_prefs
    }
}

/// Options for one deploy invocation. Exactly one variant exists per project
/// kind, so an invocation can never carry an option that does not belong to
/// the project it deploys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DeployOptions {
    AccountCustomization {
        account_specific_values: AccountSpecificValues,
    },
    SuiteApp {
        apply_installation_prefs: bool,
    },
}

/// Seam for the interactive questions, so the dispatch flow can run against
/// doubles instead of a terminal. Every method returns `None` when the user
/// dismisses the prompt without choosing.
#[cfg_attr(test, mockall::automock)]
pub trait DeployPrompts {
    fn account_specific_values(&self) -> LanderResult<Option<AccountSpecificValues>>;
    fn apply_installation_prefs(&self) -> LanderResult<Option<bool>>;
}

/// Dialoguer-backed prompts on the user's terminal.
pub struct TerminalPrompts;

const ACCOUNT_SPECIFIC_VALUES_PROMPT: &str =
    "Account-specific values in this project may not be valid for the target account. How should the deployment handle them?";
const APPLY_INSTALLATION_PREFS_PROMPT: &str =
    "Apply the SuiteApp's installation preferences during this deployment?";

impl DeployPrompts for TerminalPrompts {
    fn account_specific_values(&self) -> LanderResult<Option<AccountSpecificValues>> {
        let choices = <AccountSpecificValues as ValueEnum>::value_variants();
        let selection = Select::new()
            .with_prompt(ACCOUNT_SPECIFIC_VALUES_PROMPT)
            .items(choices)
            .default(0)
            .interact_on_opt(&Term::stderr())?;

        Ok(handle_account_specific_values_selection(choices, selection))
    }

    fn apply_installation_prefs(&self) -> LanderResult<Option<bool>> {
        let selection = Select::new()
            .with_prompt(APPLY_INSTALLATION_PREFS_PROMPT)
            .items(&["No", "Yes"])
            .default(0)
            .interact_on_opt(&Term::stderr())?;

        Ok(handle_apply_installation_prefs_selection(selection))
    }
}

fn handle_account_specific_values_selection(
    choices: &[AccountSpecificValues],
    selection: Option<usize>,
) -> Option<AccountSpecificValues> {
    selection.map(|index| choices[index])
}

fn handle_apply_installation_prefs_selection(selection: Option<usize>) -> Option<bool> {
    selection.map(|index| index == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_the_deployment_is_the_pre_selected_conflict_choice() {
        let choices = <AccountSpecificValues as ValueEnum>::value_variants();
        assert_eq!(choices[0], AccountSpecificValues::Error);
    }

    #[test]
    fn a_dismissed_conflict_prompt_selects_nothing() {
        let choices = <AccountSpecificValues as ValueEnum>::value_variants();
        assert_eq!(
            handle_account_specific_values_selection(choices, None),
            None
        );
    }

    #[test]
    fn conflict_selections_map_back_to_their_choice() {
        let choices = <AccountSpecificValues as ValueEnum>::value_variants();
        assert_eq!(
            handle_account_specific_values_selection(choices, Some(1)),
            Some(AccountSpecificValues::Warning)
        );
    }

    #[test]
    fn installation_prefs_default_to_no() {
        assert_eq!(handle_apply_installation_prefs_selection(Some(0)), Some(false));
    }

    #[test]
    fn choosing_yes_applies_installation_prefs() {
        assert_eq!(handle_apply_installation_prefs_selection(Some(1)), Some(true));
    }

    #[test]
    fn a_dismissed_installation_prefs_prompt_selects_nothing() {
        assert_eq!(handle_apply_installation_prefs_selection(None), None);
    }
}
