//! Delete Contact Use Case

use std::sync::Arc;

use kernel::id::ContactId;
use kernel::identity::Identity;

use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// Delete contact use case
pub struct DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns whether the id matched. Deleting twice is fine.
    pub async fn execute(&self, actor: &Identity, id: ContactId) -> ContactsResult<bool> {
        let deleted = self.repo.delete_by_id(id).await?;

        if deleted {
            tracing::info!(contact_id = %id, actor = %actor.username, "Contact deleted");
        }

        Ok(deleted)
    }
}
