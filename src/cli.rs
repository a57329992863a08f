use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::command::{self, LanderOutput};
use crate::logger::{self, LEVELS, Level};
use crate::utils::env::LanderEnv;
use crate::utils::stringify::option_from_display;
use crate::LanderResult;

#[derive(Debug, Serialize, Parser)]
#[command(
    name = "lander",
    version,
    about = "
Lander - Your Deployment Companion

Lander resolves the project-specific questions a deployment needs answered,
then hands the fully resolved command to the platform CLI and reports how it
went. Deploy the project in your current directory with:

    $ lander project deploy
"
)]
pub struct Lander {
    #[command(subcommand)]
    command: Command,

    /// Specify lander's log level
    #[arg(long = "log", short = 'l', global = true, value_parser = parse_log_level)]
    #[serde(serialize_with = "option_from_display")]
    log_level: Option<Level>,

    #[clap(skip)]
    #[serde(skip_serializing)]
    env_store: LanderEnv,
}

fn parse_log_level(value: &str) -> Result<Level, String> {
    value
        .parse::<Level>()
        .map_err(|_| format!("possible values: {}", LEVELS.join(", ")))
}

#[derive(Debug, Serialize, Subcommand)]
pub enum Command {
    /// Deployable project commands
    Project(command::Project),
}

impl Lander {
    pub async fn run(&self) -> LanderResult<LanderOutput> {
        logger::init(self.log_level);
        tracing::trace!(command_structure = ?self);

        match &self.command {
            Command::Project(command) => command.run(&self.env_store).await,
        }
    }
}
