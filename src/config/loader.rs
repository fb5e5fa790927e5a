//! Configuration file loading with precedence handling.

use crate::state::prompt::DEFAULT_MAX_INPUT_LEN;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FINDVIEW_CONFIG";

/// Environment variable overriding the search root.
pub const ROOT_ENV_VAR: &str = "FINDVIEW_ROOT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/findview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory the search starts from.
    #[serde(default)]
    pub search_root: Option<PathBuf>,

    /// Maximum characters accepted by the query and filter prompts.
    #[serde(default)]
    pub max_input_len: Option<usize>,

    /// Show the help modal before the first query prompt.
    #[serde(default)]
    pub show_help_on_start: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory handed to `find` as the starting point.
    pub search_root: PathBuf,
    /// Maximum characters accepted by the query and filter prompts.
    pub max_input_len: usize,
    /// Show the help modal before the first query prompt.
    pub show_help_on_start: bool,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from("/"),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            show_help_on_start: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/findview/findview.log` on Linux; falls back to the
/// current directory where no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("findview").join("findview.log")
    } else {
        PathBuf::from("findview.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("findview").join("config.toml"))
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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FINDVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/findview/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        search_root: config.search_root.unwrap_or(defaults.search_root),
        max_input_len: config.max_input_len.unwrap_or(defaults.max_input_len),
        show_help_on_start: config
            .show_help_on_start
            .unwrap_or(defaults.show_help_on_start),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// - `FINDVIEW_ROOT`: search root
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        if !root.is_empty() {
            config.search_root = PathBuf::from(root);
        }
    }

    config
}

/// Apply CLI argument overrides. CLI args have the highest precedence.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    root_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(root) = root_override {
        config.search_root = root;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
