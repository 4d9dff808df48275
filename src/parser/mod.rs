use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{ConfigField, ModConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("override `{0}` is not of the form KEY=VALUE")]
    MissingEquals(String),

    #[error("unknown config key `{0}`")]
    UnknownKey(String),

    #[error("value `{value}` for `{key}` is not an integer")]
    BadValue { key: String, value: String },
}

/// Parse a (possibly partial) JSON config.
///
/// Keys are the camelCase field names; missing keys keep their default
/// and unknown keys are rejected so typos do not silently vanish.
pub fn load(json: &str) -> Result<ModConfig> {
    debug!("config file size: {} bytes", json.len());
    let config: ModConfig =
        serde_json::from_str(json).with_context(|| "Failed to parse config JSON")?;
    info!("config loaded");
    Ok(config)
}

/// Split a single `KEY=VALUE` override.
pub fn parse_override(raw: &str) -> Result<(ConfigField, i64), ConfigError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::MissingEquals(raw.to_string()))?;
    let key = key.trim();
    let value = value.trim();

    let field = ConfigField::from_key(key).ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
    let value = value.parse::<i64>().map_err(|_| ConfigError::BadValue {
        key: key.into(),
        value: value.into(),
    })?;
    Ok((field, value))
}

/// Apply overrides left to right; a later override of the same key wins.
pub fn apply_overrides<S: AsRef<str>>(config: ModConfig, overrides: &[S]) -> Result<ModConfig> {
    let mut config = config;
    for raw in overrides {
        let (field, value) = parse_override(raw.as_ref())?;
        debug!("override {} = {}", field.key(), value);
        config = config.with_field(field, value);
    }
    Ok(config)
}
