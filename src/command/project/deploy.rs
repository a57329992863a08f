use camino::Utf8PathBuf;
use clap::Parser;
use lander_std::{Spinner, Style, infoln};
use serde::Serialize;

use crate::command::LanderOutput;
use crate::command::project::states::{OptionsResolved, ProjectKindResolved, Submitted};
use crate::options::{
    AccountSpecificValuesOpt, ApplyInstallationPrefsOpt, DeployOptions, DeployPrompts,
    TerminalPrompts,
};
use crate::project::{ProjectConfig, ProjectInfo, ProjectKind};
use crate::runner::{self, ActionStatus, CommandRunner, EngineCli, EngineError, ExecuteAction};
use crate::utils::env::{LanderEnv, LanderEnvKey};
use crate::{LanderError, LanderResult};

#[derive(Debug, Serialize, Parser)]
pub struct Deploy {
    /// Directory to deploy from
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    #[command(flatten)]
    account_specific_values: AccountSpecificValuesOpt,

    #[command(flatten)]
    apply_installation_prefs: ApplyInstallationPrefsOpt,
}

impl Deploy {
    pub async fn run(&self, env: &LanderEnv) -> LanderResult<LanderOutput> {
        let engine_bin = env.get(LanderEnvKey::EngineBin)?.map(Utf8PathBuf::from);
        let runner = CommandRunner::new(EngineCli::new(engine_bin));
        self.dispatch(&TerminalPrompts, &runner).await
    }

    /// Drives one guided deploy to completion or cancellation. Every early
    /// exit happens before the engine is called, so a dispatch never leaves
    /// a partially submitted command behind.
    async fn dispatch<P, E>(
        &self,
        prompts: &P,
        runner: &CommandRunner<E>,
    ) -> LanderResult<LanderOutput>
    where
        P: DeployPrompts,
        E: ExecuteAction,
    {
        let resolved = self.resolve_project_kind()?;

        let options = match resolved.resolve_options(self, prompts)? {
            Some(options) => options,
            None => return Ok(LanderOutput::DeployCancelled),
        };

        let submitted = options.submit(runner).await?;
        submitted.report()
    }

    fn resolve_project_kind(&self) -> LanderResult<ProjectKindResolved> {
        let config = ProjectConfig::load(&self.dir)?;
        let project_dir = config.project_dir(&self.dir);
        let kind = ProjectInfo::new(project_dir.clone()).kind()?;
        tracing::debug!(%project_dir, ?kind, "resolved project kind");

        Ok(ProjectKindResolved { project_dir, kind })
    }
}

impl ProjectKindResolved {
    /// Resolves the one option the project kind calls for: from its flag when
    /// one was passed, interactively otherwise. `None` means the user
    /// dismissed the prompt and the deploy should halt silently.
    fn resolve_options(
        self,
        deploy: &Deploy,
        prompts: &impl DeployPrompts,
    ) -> LanderResult<Option<OptionsResolved>> {
        let options = match self.kind {
            ProjectKind::AccountCustomization => {
                let choice = match deploy.account_specific_values.preset() {
                    Some(choice) => Some(choice),
                    None => prompts.account_specific_values()?,
                };
                choice.map(|account_specific_values| DeployOptions::AccountCustomization {
                    account_specific_values,
                })
            }
            ProjectKind::SuiteApp => {
                let choice = match deploy.apply_installation_prefs.preset() {
                    Some(choice) => Some(choice),
                    None => prompts.apply_installation_prefs()?,
                };
                choice.map(|apply_installation_prefs| DeployOptions::SuiteApp {
                    apply_installation_prefs,
                })
            }
        };

        Ok(options.map(|options| OptionsResolved {
            project_dir: self.project_dir,
            kind: self.kind,
            options,
        }))
    }
}

impl OptionsResolved {
    /// Submits through the runner, keeping a progress notice on screen until
    /// the pending result settles. Past this point the deploy can no longer
    /// be cancelled; it runs to completion or failure.
    async fn submit<E: ExecuteAction>(
        self,
        runner: &CommandRunner<E>,
    ) -> LanderResult<Submitted> {
        let action = runner::deploy_action(self.project_dir, &self.options);
        infoln!(
            "Triggered {} for the {}.",
            Style::Command.paint(runner::DEPLOY_ACTION),
            self.kind
        );

        let spinner = Spinner::new("Deploying...");
        let result = runner.run(action).await;
        spinner.stop();

        Ok(Submitted {
            kind: self.kind,
            result: result?,
        })
    }
}

impl Submitted {
    /// Binary outcome only: a success notification or a generic failure.
    fn report(self) -> LanderResult<LanderOutput> {
        match self.result.status {
            ActionStatus::Success => Ok(LanderOutput::DeploySuccess { kind: self.kind }),
            ActionStatus::Error => Err(LanderError::new(EngineError::ReportedFailure)),
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use super::*;
    use crate::LanderErrorCode;
    use crate::options::{AccountSpecificValues, MockDeployPrompts};
    use crate::project::MANIFEST_FILE;
    use crate::runner::{ActionResult, MockExecuteAction};

    fn project_dir(manifest: Option<&str>) -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        if let Some(manifest) = manifest {
            std::fs::write(path.join(MANIFEST_FILE), manifest).unwrap();
        }
        (dir, path)
    }

    fn acp_manifest() -> &'static str {
        r#"<manifest projecttype="ACCOUNTCUSTOMIZATION"></manifest>"#
    }

    fn suiteapp_manifest() -> &'static str {
        r#"<manifest projecttype="SUITEAPP"></manifest>"#
    }

    fn deploy(dir: &Utf8PathBuf, extra_args: &[&str]) -> Deploy {
        let mut args = vec!["deploy", "--dir", dir.as_str()];
        args.extend_from_slice(extra_args);
        Deploy::try_parse_from(args).unwrap()
    }

    fn success() -> ActionResult {
        ActionResult {
            status: ActionStatus::Success,
            payload: serde_json::Map::new(),
        }
    }

    fn failure() -> ActionResult {
        ActionResult {
            status: ActionStatus::Error,
            payload: serde_json::Map::new(),
        }
    }

    // Engine double that fails the test if any submission reaches it.
    fn never_called_engine() -> MockExecuteAction {
        let mut engine = MockExecuteAction::new();
        engine.expect_execute_action().times(0);
        engine
    }

    #[tokio::test]
    async fn a_metadata_failure_reports_once_and_never_submits() {
        let (_dir, path) = project_dir(None);
        let deploy = deploy(&path, &[]);
        let runner = CommandRunner::new(never_called_engine());

        let error = deploy
            .dispatch(&MockDeployPrompts::new(), &runner)
            .await
            .unwrap_err();

        assert_eq!(error.code(), Some(LanderErrorCode::E001));
    }

    #[tokio::test]
    async fn dismissing_the_conflict_prompt_halts_silently() {
        let (_dir, path) = project_dir(Some(acp_manifest()));
        let deploy = deploy(&path, &[]);
        let runner = CommandRunner::new(never_called_engine());

        let mut prompts = MockDeployPrompts::new();
        prompts
            .expect_account_specific_values()
            .times(1)
            .returning(|| Ok(None));

        let output = deploy.dispatch(&prompts, &runner).await.unwrap();
        assert_eq!(output, LanderOutput::DeployCancelled);
    }

    #[tokio::test]
    async fn dismissing_the_installation_prefs_prompt_halts_silently() {
        let (_dir, path) = project_dir(Some(suiteapp_manifest()));
        let deploy = deploy(&path, &[]);
        let runner = CommandRunner::new(never_called_engine());

        let mut prompts = MockDeployPrompts::new();
        prompts
            .expect_apply_installation_prefs()
            .times(1)
            .returning(|| Ok(None));

        let output = deploy.dispatch(&prompts, &runner).await.unwrap();
        assert_eq!(output, LanderOutput::DeployCancelled);
    }

    #[tokio::test]
    async fn the_default_conflict_choice_submits_the_error_option() {
        let (_dir, path) = project_dir(Some(acp_manifest()));
        let deploy = deploy(&path, &[]);

        let mut prompts = MockDeployPrompts::new();
        prompts
            .expect_account_specific_values()
            .times(1)
            .returning(|| Ok(Some(AccountSpecificValues::Error)));

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .withf(|action| {
                !action.interactive
                    && action.options.len() == 1
                    && action.options.get("accountspecificvalues").map(String::as_str)
                        == Some("ERROR")
            })
            .times(1)
            .returning(|_| Ok(success()));

        let output = deploy
            .dispatch(&prompts, &CommandRunner::new(engine))
            .await
            .unwrap();
        assert_eq!(
            output,
            LanderOutput::DeploySuccess {
                kind: ProjectKind::AccountCustomization
            }
        );
    }

    #[tokio::test]
    async fn the_warning_choice_submits_the_warning_option() {
        let (_dir, path) = project_dir(Some(acp_manifest()));
        // preset through the flag: the prompt must not run at all, which the
        // expectation-free prompts double asserts
        let deploy = deploy(&path, &["--account-specific-values", "warning"]);

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .withf(|action| {
                action.options.get("accountspecificvalues").map(String::as_str)
                    == Some("WARNING")
            })
            .times(1)
            .returning(|_| Ok(success()));

        deploy
            .dispatch(&MockDeployPrompts::new(), &CommandRunner::new(engine))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn declining_installation_prefs_submits_the_empty_sentinel() {
        let (_dir, path) = project_dir(Some(suiteapp_manifest()));
        let deploy = deploy(&path, &[]);

        let mut prompts = MockDeployPrompts::new();
        prompts
            .expect_apply_installation_prefs()
            .times(1)
            .returning(|| Ok(Some(false)));

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .withf(|action| {
                action.options.len() == 1
                    && action.options.get("applycontentprotection").map(String::as_str)
                        == Some("")
            })
            .times(1)
            .returning(|_| Ok(success()));

        deploy
            .dispatch(&prompts, &CommandRunner::new(engine))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn applying_installation_prefs_submits_a_non_empty_sentinel() {
        let (_dir, path) = project_dir(Some(suiteapp_manifest()));
        let deploy = deploy(&path, &[]);

        let mut prompts = MockDeployPrompts::new();
        prompts
            .expect_apply_installation_prefs()
            .times(1)
            .returning(|| Ok(Some(true)));

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .withf(|action| {
                action
                    .options
                    .get("applycontentprotection")
                    .is_some_and(|value| !value.is_empty())
            })
            .times(1)
            .returning(|_| Ok(success()));

        let output = deploy
            .dispatch(&prompts, &CommandRunner::new(engine))
            .await
            .unwrap();
        assert_eq!(
            output,
            LanderOutput::DeploySuccess {
                kind: ProjectKind::SuiteApp
            }
        );
    }

    #[tokio::test]
    async fn an_engine_reported_failure_becomes_a_generic_error() {
        let (_dir, path) = project_dir(Some(suiteapp_manifest()));
        let deploy = deploy(&path, &["--apply-installation-prefs", "true"]);

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .times(1)
            .returning(|_| Ok(failure()));

        let error = deploy
            .dispatch(&MockDeployPrompts::new(), &CommandRunner::new(engine))
            .await
            .unwrap_err();
        assert_eq!(error.code(), Some(LanderErrorCode::E011));
    }

    #[tokio::test]
    async fn a_configured_project_folder_is_where_the_manifest_is_read() {
        let (_dir, path) = project_dir(None);
        std::fs::write(path.join("lander.toml"), "project-folder = \"app\"\n").unwrap();
        std::fs::create_dir(path.join("app")).unwrap();
        std::fs::write(path.join("app").join(MANIFEST_FILE), acp_manifest()).unwrap();

        let deploy = deploy(&path, &["--account-specific-values", "error"]);

        let mut engine = MockExecuteAction::new();
        engine
            .expect_execute_action()
            .withf(move |action| action.project_dir.file_name() == Some("app"))
            .times(1)
            .returning(|_| Ok(success()));

        deploy
            .dispatch(&MockDeployPrompts::new(), &CommandRunner::new(engine))
            .await
            .unwrap();
    }
}
