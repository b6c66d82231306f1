//! Get Contact Use Case

use std::sync::Arc;

use kernel::id::ContactId;
use kernel::identity::Identity;

use crate::domain::entities::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// Get contact use case
///
/// An unknown id is `Ok(None)`, not an error.
pub struct GetContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> GetContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: &Identity,
        id: ContactId,
    ) -> ContactsResult<Option<Contact>> {
        let contact = self.repo.find_by_id(id).await?;

        tracing::debug!(
            contact_id = %id,
            found = contact.is_some(),
            actor = %actor.username,
            "Contact fetched"
        );

        Ok(contact)
    }
}
