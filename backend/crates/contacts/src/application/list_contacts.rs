//! List Contacts Use Case

use std::sync::Arc;

use kernel::identity::Identity;

use crate::domain::entities::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// List contacts use case
pub struct ListContactsUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> ListContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Whole collection, unpaginated
    pub async fn execute(&self, actor: &Identity) -> ContactsResult<Vec<Contact>> {
        let contacts = self.repo.list_all().await?;

        tracing::debug!(
            count = contacts.len(),
            actor = %actor.username,
            "Contacts listed"
        );

        Ok(contacts)
    }
}
