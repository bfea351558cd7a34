use std::process::ExitCode;

use clap::Parser;
use tango_config::Config;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod provider;
mod state;
mod store;
#[cfg(test)]
mod testing;

use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::new();
    init_tracing(config.log_json);

    let cli = Cli::parse();

    match run(config, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config, cli: Cli) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    commands::run(&state, cli.command).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
