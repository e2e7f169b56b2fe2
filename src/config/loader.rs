//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConnectionData;
use crate::config::validation::{validate_connection_data, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate connection data from a TOML file.
pub fn load_connection_data(path: &Path) -> Result<ConnectionData, ConfigError> {
    let content = fs::read_to_string(path)?;
    let data: ConnectionData = toml::from_str(&content)?;

    validate_connection_data(&data).map_err(ConfigError::Validation)?;

    tracing::debug!(
        path = %path.display(),
        profile = %data.connection_profile_path.display(),
        "Connection data loaded"
    );
    Ok(data)
}
