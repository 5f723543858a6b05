//! Klaimeer configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults matching the shipped globe, so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use klaimeer_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{KlaimeerConfig, LoggingConfig, CONFIG_SCHEMA_VERSION};

use klaimeer_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default if
/// none exists, and validates the result.
pub fn load_config() -> Result<KlaimeerConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<KlaimeerConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Read only the `[logging]` section of a config file.
///
/// Uses `path`, or the platform default when `None`. Nothing is created,
/// validated or logged, so this can run before a subscriber is installed.
/// Returns `None` if the file is missing or does not parse.
pub fn peek_logging(path: Option<&Path>) -> Option<LoggingConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_loader::default_config_path().ok()?,
    };
    let content = std::fs::read_to_string(&path).ok()?;
    toml_loader::parse_str(&content).ok().map(|config| config.logging)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &KlaimeerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
