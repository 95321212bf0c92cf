//! Application service layer.
//!
//! Services contain business logic and sit between the HTTP handlers and
//! the data access layer. They own validation order and the mapping of
//! "nothing deleted" to a not-found error.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

// Re-export common types used by services
pub use crate::models::{Contact, CreateContactRequest, DeleteOutcome};
