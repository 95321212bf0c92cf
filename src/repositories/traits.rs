use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (SQLite, in-memory mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve up to `limit` contacts in id order, skipping `offset`.
    async fn list(&self, limit: u32, offset: u64) -> ContactResult<Vec<Contact>>;

    /// Insert a new contact and return it with its assigned id.
    async fn create(&self, contact: &NewContact) -> ContactResult<Contact>;

    /// Delete a contact, returning the number of rows removed.
    async fn delete(&self, id: ContactId) -> ContactResult<u64>;
}
