mod deploy;
mod states;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::command::LanderOutput;
use crate::utils::env::LanderEnv;
use crate::LanderResult;

#[derive(Debug, Serialize, Parser)]
pub struct Project {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Serialize, Subcommand)]
pub enum Command {
    /// Deploy the project to its target account
    Deploy(deploy::Deploy),
}

impl Project {
    pub async fn run(&self, env: &LanderEnv) -> LanderResult<LanderOutput> {
        match &self.command {
            Command::Deploy(command) => command.run(env).await,
        }
    }
}
