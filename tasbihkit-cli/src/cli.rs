//! Command-line definition and dispatch

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tasbihkit::{CategoryStore, Transport};

/// Query the TasbihKit category documents
#[derive(Debug, Parser)]
#[command(name = "tasbihkit", version)]
pub struct Cli {
    /// Data directory holding <category>.json documents
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every entry of a category
    List {
        category: String,
    },
    /// Print the entry with the given id
    Id {
        category: String,
        id: String,
    },
    /// Print entries whose label contains a keyword (case-insensitive)
    Label {
        category: String,
        keyword: String,
    },
    /// Print entries whose translation contains a phrase (case-insensitive)
    Translation {
        category: String,
        text: String,
    },
}

/// Run one command against the accessor and return its JSON result
pub async fn execute<T: Transport>(
    store: &CategoryStore<T>,
    command: &Command,
) -> tasbihkit::Result<Value> {
    let value = match command {
        Command::List { category } => serde_json::to_value(store.load_all(category).await?)?,
        Command::Id { category, id } => {
            serde_json::to_value(store.search_by_id(category, id.as_str()).await?)?
        }
        Command::Label { category, keyword } => {
            serde_json::to_value(store.search_by_label(category, keyword).await?)?
        }
        Command::Translation { category, text } => {
            serde_json::to_value(store.search_by_translation(category, text).await?)?
        }
    };

    Ok(value)
}

/// Version, revision, build time and profile stamped by build.rs
pub fn build_id() -> String {
    format!(
        "v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TASBIHKIT_REVISION"),
        env!("TASBIHKIT_BUILT_AT"),
        env!("TASBIHKIT_PROFILE")
    )
}

/// Render a result for stdout
pub fn render(value: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
