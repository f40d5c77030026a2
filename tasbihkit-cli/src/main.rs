//! tasbihkit - command-line front end for the TasbihKit category accessor
//!
//! Prints category documents, or entries matching an id, label keyword or
//! translation phrase, as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tasbihkit::TasbihKit;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let toml_config =
        config::load_toml_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over --log-level and the config file
    let log_level = config::resolve_log_level(cli.log_level.as_deref(), &toml_config);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tasbihkit {}", cli::build_id());

    let base_url = config::resolve_base_url(cli.base_url.as_deref(), &toml_config);
    let store = TasbihKit::new()?.with_base_url(base_url);

    debug!(command = ?cli.command, "Executing command");
    let value = cli::execute(&store, &cli.command).await?;

    println!("{}", cli::render(&value, cli.compact)?);

    Ok(())
}
