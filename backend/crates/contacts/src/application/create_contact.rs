//! Create Contact Use Case

use std::sync::Arc;

use kernel::id::ContactId;
use kernel::identity::Identity;

use crate::domain::entities::{Contact, ContactInfo};
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// Create contact input
#[derive(Debug, Clone, Default)]
pub struct CreateContactInput {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub image: Option<String>,
}

/// Create contact use case
pub struct CreateContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> CreateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: &Identity,
        input: CreateContactInput,
    ) -> ContactsResult<ContactId> {
        let contact = Contact::new(input.name, input.contact, input.image);

        self.repo.insert(&contact).await?;

        tracing::info!(
            contact_id = %contact.id,
            actor = %actor.username,
            "Contact created"
        );

        Ok(contact.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryContactRepository;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_create_keeps_absent_fields_empty() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let actor = Identity {
            user_id: UserId::new(),
            username: "a".into(),
        };

        let id = CreateContactUseCase::new(repo.clone())
            .execute(
                &actor,
                CreateContactInput {
                    name: Some("Ann".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Ann"));
        assert_eq!(stored.contact, ContactInfo::default());
        assert!(stored.image.is_none());
    }
}
