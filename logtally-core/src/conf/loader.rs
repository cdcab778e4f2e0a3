use crate::conf::error::ConfigError;
use crate::conf::types::LogtallyConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<LogtallyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &contents)?;

    tracing::debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

/// Parses and validates config text. `origin` is only used in error messages.
pub fn parse_config(origin: &Path, contents: &str) -> Result<LogtallyConfig, ConfigError> {
    let config: LogtallyConfig =
        toml::from_str(contents).map_err(|e| ConfigError::parse(origin, e))?;

    validate_config(&config)?;
    Ok(config)
}
