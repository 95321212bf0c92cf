//! Contact service layer.
//!
//! Business logic for listing, creating, and deleting contacts.

use crate::domain::{ContactId, Pagination};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, CreateContactRequest, DeleteOutcome};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List one page of contacts in id order.
    async fn list_contacts(&self, pagination: Pagination) -> ContactResult<Vec<Contact>>;

    /// Validate a create request and persist it.
    ///
    /// Checks run in a fixed order: all fields present, then email format,
    /// then phone format. Nothing is written if any check fails.
    async fn create_contact(&self, request: CreateContactRequest) -> ContactResult<Contact>;

    /// Delete a contact by id.
    ///
    /// Returns `ContactError::NotFound` when no row matched.
    async fn delete_contact(&self, id: ContactId) -> ContactResult<DeleteOutcome>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self, pagination: Pagination) -> ContactResult<Vec<Contact>> {
        self.repository
            .list(pagination.limit(), pagination.offset())
            .await
    }

    async fn create_contact(&self, request: CreateContactRequest) -> ContactResult<Contact> {
        let new_contact = request.validate().map_err(|e| {
            warn!(error = %e, "Rejected contact");
            ContactError::Validation(e)
        })?;

        let contact = self.repository.create(&new_contact).await?;
        info!(id = contact.id, "Contact created");
        Ok(contact)
    }

    async fn delete_contact(&self, id: ContactId) -> ContactResult<DeleteOutcome> {
        let changes = self.repository.delete(id).await?;
        if changes == 0 {
            return Err(ContactError::NotFound);
        }

        info!(%id, changes, "Contact deleted");
        Ok(DeleteOutcome::deleted(changes))
    }
}
