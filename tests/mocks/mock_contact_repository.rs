use async_trait::async_trait;
use contacts_service::domain::ContactId;
use contacts_service::error::{ContactError, ContactResult};
use contacts_service::models::{Contact, NewContact};
use contacts_service::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that assigns
/// ids like the store does, can be switched into a failing mode, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    failing: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            failing: Arc::new(AtomicBool::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> ContactResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(ContactError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self, limit: u32, offset: u64) -> ContactResult<Vec<Contact>> {
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<Contact> {
        self.track_call("create")?;

        let mut next_id = self.next_id.lock().unwrap();
        let created = Contact::from_new(*next_id, contact.clone());
        *next_id += 1;

        self.contacts
            .lock()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: ContactId) -> ContactResult<u64> {
        self.track_call("delete")?;

        let removed = self.contacts.lock().unwrap().remove(&id.get());
        Ok(if removed.is_some() { 1 } else { 0 })
    }
}
