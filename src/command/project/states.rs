use camino::Utf8PathBuf;

use crate::options::DeployOptions;
use crate::project::ProjectKind;
use crate::runner::ActionResult;

// States of one guided deploy, in flow order. Each transition consumes the
// previous state, so an invocation can only ever move forward: resolve the
// project kind, resolve its one option, submit, report.

#[derive(Debug)]
pub struct ProjectKindResolved {
    pub project_dir: Utf8PathBuf,
    pub kind: ProjectKind,
}

#[derive(Debug)]
pub struct OptionsResolved {
    pub project_dir: Utf8PathBuf,
    pub kind: ProjectKind,
    pub options: DeployOptions,
}

#[derive(Debug)]
pub struct Submitted {
    pub kind: ProjectKind,
    pub result: ActionResult,
}
