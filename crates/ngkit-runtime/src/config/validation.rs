//! Configuration validation utilities.

use std::collections::HashSet;

use super::error::{ConfigError, ConfigResult};
use super::schema::{LogOutput, LoggingConfig, ModuleConfig, ToolkitConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &ToolkitConfig) -> ConfigResult<()> {
    validate_module_config(&config.module)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the module name and its requirements.
fn validate_module_config(module: &ModuleConfig) -> ConfigResult<()> {
    if module.name.is_empty() {
        return Err(ConfigError::missing_field("module.name"));
    }

    if module.name.chars().any(char::is_whitespace) {
        return Err(ConfigError::validation(
            "Module name cannot contain whitespace",
        ));
    }

    let mut seen = HashSet::new();
    for required in &module.requires {
        if required.is_empty() {
            return Err(ConfigError::validation(
                "Module requirements cannot be empty",
            ));
        }
        if !seen.insert(required) {
            return Err(ConfigError::DuplicateRequirement(required.clone()));
        }
    }

    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }
    Ok(())
}
