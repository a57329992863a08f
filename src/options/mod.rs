mod deploy;

pub(crate) use deploy::{
    AccountSpecificValues, AccountSpecificValuesOpt, ApplyInstallationPrefsOpt, DeployOptions,
    DeployPrompts, TerminalPrompts,
};

#[cfg(test)]
pub(crate) use deploy::MockDeployPrompts;
