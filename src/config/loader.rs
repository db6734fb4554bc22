//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "POSTPAGER_CONFIG";
/// Environment variable naming the posts file.
pub const ENV_DATA: &str = "POSTPAGER_DATA";
/// Environment variable naming the signed-in user.
pub const ENV_USER: &str = "POSTPAGER_USER";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but holds an unusable value.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Config key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/postpager/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// JSON posts file to browse.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Signed-in user whose posts "my page" lists.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Posts per page on narrow terminals.
    #[serde(default)]
    pub compact_page_size: Option<u32>,

    /// Posts per page on wide terminals.
    #[serde(default)]
    pub wide_page_size: Option<u32>,

    /// Terminal width (columns) below which the compact page size applies.
    #[serde(default)]
    pub compact_width: Option<u16>,

    /// Simulated latency added to every fetch, in milliseconds.
    #[serde(default)]
    pub fetch_latency_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Posts file; `None` until some layer names one.
    pub data_file: Option<PathBuf>,
    /// Signed-in user.
    pub user_id: Option<String>,
    /// Posts per page on narrow terminals.
    pub compact_page_size: u32,
    /// Posts per page on wide terminals.
    pub wide_page_size: u32,
    /// Compact/wide breakpoint in columns.
    pub compact_width: u16,
    /// Simulated fetch latency in milliseconds.
    pub fetch_latency_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            user_id: None,
            compact_page_size: 4,
            wide_page_size: 8,
            compact_width: 100,
            fetch_latency_ms: 0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/postpager/postpager.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("postpager").join("postpager.log")
    } else {
        PathBuf::from("postpager.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/postpager/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postpager").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTPAGER_CONFIG` environment variable
/// 3. Default path `~/.config/postpager/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `POSTPAGER_DATA`: posts file
/// - `POSTPAGER_USER`: signed-in user
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(data) = non_empty_env(ENV_DATA) {
        config.data_file = Some(PathBuf::from(data));
    }

    if let Some(user) = non_empty_env(ENV_USER) {
        config.user_id = Some(user);
    }

    config
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        user_id: config.user_id.or(defaults.user_id),
        compact_page_size: config
            .compact_page_size
            .unwrap_or(defaults.compact_page_size),
        wide_page_size: config.wide_page_size.unwrap_or(defaults.wide_page_size),
        compact_width: config.compact_width.unwrap_or(defaults.compact_width),
        fetch_latency_ms: config.fetch_latency_ms.unwrap_or(defaults.fetch_latency_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file: Option<PathBuf>,
    user_id: Option<String>,
    latency_ms: Option<u64>,
) -> ResolvedConfig {
    if let Some(path) = data_file {
        config.data_file = Some(path);
    }

    if let Some(user) = user_id {
        config.user_id = Some(user);
    }

    if let Some(latency) = latency_ms {
        config.fetch_latency_ms = latency;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
