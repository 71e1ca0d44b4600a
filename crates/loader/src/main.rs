//! question-loader CLI entry point.

use clap::Parser;
use question_loader::cli::Cli;
use question_loader::{commands, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.global);

    commands::run(cli).await?;

    Ok(())
}
