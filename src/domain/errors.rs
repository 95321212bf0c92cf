//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating request input.
///
/// The `Display` output is the message returned to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of name, email, or phone is missing or empty.
    MissingFields,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The contact id is not a positive integer.
    InvalidId(String),

    /// A pagination parameter is not a positive integer.
    InvalidPageParam {
        param: &'static str,
        value: String,
    },

    /// The request body is not a JSON object.
    InvalidBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "All fields are required"),
            Self::InvalidEmail(_) => write!(f, "Invalid email format"),
            Self::InvalidPhone(_) => write!(f, "Phone must be 10 digits"),
            Self::InvalidId(_) => write!(f, "Invalid contact id"),
            Self::InvalidPageParam { param, .. } => {
                write!(f, "{} must be a positive integer", param)
            }
            Self::InvalidBody => write!(f, "Request body must be a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}
