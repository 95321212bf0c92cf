//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact's identifier,
//! email address, and phone number, plus list pagination. These value
//! objects validate at construction time and keep unparsed transport input
//! from reaching the store.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod pagination;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use pagination::Pagination;
pub use phone::PhoneNumber;
