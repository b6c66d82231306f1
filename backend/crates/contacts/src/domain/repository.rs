//! Repository Traits
//!
//! Interfaces for contact persistence. Implementations live in `infra`.

use crate::domain::entities::{Contact, ContactUpdate};
use crate::error::ContactsResult;
use kernel::id::ContactId;

/// Contact repository trait
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Persist a new contact
    async fn insert(&self, contact: &Contact) -> ContactsResult<()>;

    /// Every contact, oldest first
    async fn list_all(&self) -> ContactsResult<Vec<Contact>>;

    async fn find_by_id(&self, id: ContactId) -> ContactsResult<Option<Contact>>;

    /// Returns whether a contact matched
    async fn update_by_id(&self, id: ContactId, update: &ContactUpdate) -> ContactsResult<bool>;

    /// Returns whether a contact matched
    async fn delete_by_id(&self, id: ContactId) -> ContactsResult<bool>;
}
