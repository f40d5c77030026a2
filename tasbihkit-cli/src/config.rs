//! Configuration resolution for the tasbihkit CLI
//!
//! Base URL priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`TASBIHKIT_BASE_URL`)
//! 3. TOML config file
//! 4. Compiled default (public jsDelivr CDN)
//!
//! A missing config file is not an error. An unreadable or malformed one is.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tasbihkit::DEFAULT_BASE_URL;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable overriding the CDN data directory
pub const BASE_URL_ENV: &str = "TASBIHKIT_BASE_URL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {0}")]
    Missing(PathBuf),
}

/// Settings loaded from `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Data directory holding `<category>.json` documents
    #[serde(default)]
    pub base_url: Option<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Where the effective base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

/// Platform config file location: `<config dir>/tasbihkit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tasbihkit").join("config.toml"))
}

/// Load the TOML config
///
/// With `explicit` set the file must exist. Otherwise the platform default
/// location is tried and its absence yields an empty config.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            other => {
                debug!(path = ?other, "No config file found, using defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Resolve the base URL from explicit inputs
pub fn resolve_base_url_from(
    cli_arg: Option<&str>,
    env_value: Option<String>,
    toml_config: &TomlConfig,
) -> (String, BaseUrlSource) {
    if let Some(url) = cli_arg.filter(|u| !u.trim().is_empty()) {
        return (url.to_string(), BaseUrlSource::CommandLine);
    }

    if let Some(url) = env_value.filter(|u| !u.trim().is_empty()) {
        return (url, BaseUrlSource::Environment);
    }

    if let Some(url) = toml_config
        .base_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
    {
        return (url.to_string(), BaseUrlSource::ConfigFile);
    }

    (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default)
}

/// Resolve the base URL, reading [`BASE_URL_ENV`] from the process environment
pub fn resolve_base_url(cli_arg: Option<&str>, toml_config: &TomlConfig) -> String {
    let (url, source) =
        resolve_base_url_from(cli_arg, std::env::var(BASE_URL_ENV).ok(), toml_config);

    info!(base_url = %url, source = ?source, "Resolved category base URL");
    url
}

/// Resolve the log level: command line, then config file, then `warn`
pub fn resolve_log_level(cli_arg: Option<&str>, toml_config: &TomlConfig) -> String {
    cli_arg
        .or(toml_config.logging.level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}
