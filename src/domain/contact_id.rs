//! ContactId value object.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for the store-assigned contact id.
///
/// Ids are positive integers. Path segments arrive as text, so parsing goes
/// through [`FromStr`] rather than any implicit numeric coercion.
///
/// # Example
///
/// ```
/// use contacts_service::domain::ContactId;
///
/// let id: ContactId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i64);

impl ContactId {
    /// Create a new ContactId, validating that it's positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` for zero or negative values.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
