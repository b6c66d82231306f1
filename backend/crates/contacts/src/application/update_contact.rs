//! Update Contact Use Case

use std::sync::Arc;

use kernel::id::ContactId;
use kernel::identity::Identity;

use crate::domain::entities::ContactUpdate;
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// Update contact use case
pub struct UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns whether the id matched. A miss is not an error.
    pub async fn execute(
        &self,
        actor: &Identity,
        id: ContactId,
        update: ContactUpdate,
    ) -> ContactsResult<bool> {
        let matched = self.repo.update_by_id(id, &update).await?;

        if matched {
            tracing::info!(contact_id = %id, actor = %actor.username, "Contact updated");
        } else {
            tracing::debug!(contact_id = %id, actor = %actor.username, "Update matched nothing");
        }

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Contact, ContactInfo};
    use crate::infra::memory::InMemoryContactRepository;
    use kernel::id::UserId;

    fn actor() -> Identity {
        Identity {
            user_id: UserId::new(),
            username: "a".into(),
        }
    }

    #[tokio::test]
    async fn test_name_only_update_clears_contact_info() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let contact = Contact::new(
            Some("Ann".into()),
            ContactInfo {
                email: Some("ann@x.io".into()),
                address: Some("1 Main St".into()),
                phone: Some("555".into()),
            },
            None,
        );
        repo.insert(&contact).await.unwrap();

        let matched = UpdateContactUseCase::new(repo.clone())
            .execute(
                &actor(),
                contact.id,
                ContactUpdate {
                    name: Some("Annie".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(matched);

        let stored = repo.find_by_id(contact.id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Annie"));
        assert!(stored.contact.email.is_none());
        assert!(stored.contact.address.is_none());
        assert!(stored.contact.phone.is_none());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_an_error() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let matched = UpdateContactUseCase::new(repo)
            .execute(&actor(), ContactId::new(), ContactUpdate::default())
            .await
            .unwrap();
        assert!(!matched);
    }
}
