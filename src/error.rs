//! Error types for the contacts service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while serving a contact operation.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Request input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete targeted an id with no row
    #[error("Contact not found")]
    NotFound,

    /// The underlying store reported a failure
    #[error("{}", storage_message(.0))]
    Storage(#[from] sqlx::Error),
}

impl ContactError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::Validation(_) => 400,
            ContactError::NotFound => 404,
            ContactError::Storage(_) => 500,
        }
    }
}

/// Prefer the store's own message over sqlx's wrapper text.
fn storage_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
