use anyhow::{Context, Result};
use clap::Parser;
use common::Settings;
use std::process::ExitCode;
use tracing::info;

use medialogger::{AppState, cli::Cli, commands, telemetry};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = Settings::load().context("failed to load MediaLogger settings")?;
    if let Some(base_url) = cli.base_url.clone() {
        settings.api.base_url = base_url;
    }

    // Initialize logging
    telemetry::init_tracing(&settings.log.filter, cli.verbose);

    info!("Using backend at {}", settings.api.base_url);

    let state = AppState::from_settings(&settings);
    commands::run(cli.command, &state).await
}
