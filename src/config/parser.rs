//! Config file parser
//!
//! Parses and validates YAML config files. JSON files work too since YAML
//! accepts JSON documents.

use crate::config::types::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a config from a file path
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a config from a YAML or JSON string
pub fn load_config_from_str(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a config
pub fn validate_config(config: &Config) -> Result<()> {
    if config.apis.is_empty() {
        return Err(Error::invalid_value("apis", "at least one api is required"));
    }

    for (i, endpoint) in config.apis.iter().enumerate() {
        if endpoint.api().trim().is_empty() {
            return Err(Error::invalid_value(
                format!("apis[{i}]"),
                "api path cannot be empty",
            ));
        }

        if endpoint
            .name_override()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(Error::invalid_value(
                format!("apis[{i}].name"),
                "name cannot be empty",
            ));
        }
    }

    if config.type_path.as_os_str().is_empty() {
        return Err(Error::invalid_value("type_path", "cannot be empty"));
    }

    Ok(())
}
