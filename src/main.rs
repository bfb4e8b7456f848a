//! opsdesk - permission checks for the operations dashboard
//!
//! Evaluates task, report and reviewer decisions against a snapshot export

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use opsdesk::cli::{self, Cli};
use opsdesk::utils::logging::init_tracing;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match try_main(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Display (not Debug) keeps the context chain readable
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> anyhow::Result<String> {
    let config = cli::load_config(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    init_tracing(config.logging())?;

    let output = cli::run(&cli, &config).await?;
    Ok(serde_json::to_string_pretty(&output)?)
}
