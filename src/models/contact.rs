//! Contact model representing a stored person record.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact as stored in the `contacts` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned surrogate key
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Ten-digit phone number
    pub phone: String,
}

impl Contact {
    /// Attach a store-assigned id to validated input.
    pub fn from_new(id: i64, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email.into_inner(),
            phone: new.phone.into_inner(),
        }
    }
}

/// Validated input for inserting a contact.
///
/// Only [`CreateContactRequest::validate`] or [`NewContact::new`] produce
/// one, so every field has already passed its format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl NewContact {
    /// Validate plain strings in the same order as a request body.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        if name.is_empty() || email.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self {
            name,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

/// Raw `POST /contacts` body.
///
/// Fields are kept as loose JSON so that wrong types surface as the same
/// validation error as missing fields instead of a deserializer rejection.
/// Built from a JSON object only; see [`CreateContactRequest::from_json`].
#[derive(Debug, Clone, Default)]
pub struct CreateContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
}

impl CreateContactRequest {
    /// Pick the three fields out of a JSON object by key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBody` for arrays, scalars, and `null`.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = body else {
            return Err(ValidationError::InvalidBody);
        };

        Ok(Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
            phone: fields.remove("phone"),
        })
    }

    /// Convenience constructor for callers that already hold strings.
    pub fn from_strs(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
            phone: Some(Value::from(phone)),
        }
    }

    /// Validate the body: presence first, then email, then phone.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        match (
            non_empty_text(self.name),
            non_empty_text(self.email),
            non_empty_text(self.phone),
        ) {
            (Some(name), Some(email), Some(phone)) => NewContact::new(name, email, phone),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

fn non_empty_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub message: String,
    pub changes: u64,
}

impl DeleteOutcome {
    pub fn deleted(changes: u64) -> Self {
        Self {
            message: "Contact deleted".to_string(),
            changes,
        }
    }
}
