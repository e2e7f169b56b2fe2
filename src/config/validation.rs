//! Configuration validation.
//!
//! Returns every problem found rather than stopping at the first one.
//! File existence is not checked here; the connect path reports missing
//! identity files with their own error.

use thiserror::Error;

use crate::config::schema::ConnectionData;

/// A single semantic problem with a [`ConnectionData`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required path is empty.
    #[error("{field} must not be empty")]
    EmptyPath { field: &'static str },

    /// The organization name is blank.
    #[error("organization must not be blank when set")]
    BlankOrganization,

    /// The query timeout is zero.
    #[error("query_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check a [`ConnectionData`] for semantic errors.
pub fn validate_connection_data(data: &ConnectionData) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let paths = [
        ("connection_profile_path", &data.connection_profile_path),
        ("certificate_path", &data.certificate_path),
        ("private_key_path", &data.private_key_path),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath { field });
        }
    }

    if let Some(org) = &data.organization {
        if org.trim().is_empty() {
            errors.push(ValidationError::BlankOrganization);
        }
    }

    if data.query_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
