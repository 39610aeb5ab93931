#![forbid(unsafe_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use silentspeak_contracts::config::PlatformConfig;
use silentspeak_contracts::{ContractViolation, Validate};

/// Configuration compiled into the binary; used when no file is given.
pub const DEFAULT_CONFIG_JSON: &str = include_str!("../config/platform.json");

pub const CONFIG_PATH_ENV: &str = "SILENTSPEAK_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] ContractViolation),
}

pub fn parse_config(raw: &str) -> Result<PlatformConfig, ConfigError> {
    let config: PlatformConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

pub fn default_config() -> Result<PlatformConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG_JSON)
}

pub fn load_config(path: &Path) -> Result<PlatformConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&raw)?;
    tracing::debug!(path = %path.display(), "loaded platform config");
    Ok(config)
}

/// Explicit path first, then `SILENTSPEAK_CONFIG`, then the built-in default.
pub fn resolve_config(explicit: Option<&Path>) -> Result<PlatformConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => load_config(Path::new(&path)),
        _ => default_config(),
    }
}
