//! In-memory contact store
//!
//! Backs `DB_URI=memory://` runs and the test suites.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::ContactId;
use tokio::sync::RwLock;

use crate::domain::entities::{Contact, ContactUpdate};
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// Contacts in insertion order
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: &Contact) -> ContactsResult<()> {
        self.contacts.write().await.push(contact.clone());
        Ok(())
    }

    async fn list_all(&self) -> ContactsResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_id(&self, id: ContactId) -> ContactsResult<Option<Contact>> {
        Ok(self
            .contacts
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn update_by_id(&self, id: ContactId, update: &ContactUpdate) -> ContactsResult<bool> {
        let mut contacts = self.contacts.write().await;
        match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                update.apply(contact, Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ContactId) -> ContactsResult<bool> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() != before)
    }
}
