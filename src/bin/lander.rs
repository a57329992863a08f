use std::process;

use clap::Parser;
use lander::cli::Lander;

#[tokio::main]
async fn main() {
    let app = Lander::parse();

    match app.run().await {
        Ok(output) => {
            output.print();
            process::exit(0);
        }
        Err(error) => {
            tracing::debug!(?error);
            eprint!("{}", error);
            process::exit(1);
        }
    }
}
