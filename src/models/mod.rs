//! Data models for the contacts service.
//!
//! This module contains the persisted contact record, the validated input
//! used to create one, and the raw request body it is built from.

pub mod contact;

pub use contact::{Contact, CreateContactRequest, DeleteOutcome, NewContact};
