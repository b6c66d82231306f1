//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::ContactId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactInfo, ContactUpdate};
use crate::domain::repository::ContactRepository;
use crate::error::ContactsResult;

/// PostgreSQL-backed contact store
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContactRepository for PgContactRepository {
    async fn insert(&self, contact: &Contact) -> ContactsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contacts (
                contact_id,
                name,
                email,
                address,
                phone,
                image,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(contact.id.as_uuid())
        .bind(&contact.name)
        .bind(&contact.contact.email)
        .bind(&contact.contact.address)
        .bind(&contact.contact.phone)
        .bind(&contact.image)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> ContactsResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                contact_id,
                name,
                email,
                address,
                phone,
                image,
                created_at,
                updated_at
            FROM contacts
            ORDER BY created_at, contact_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    async fn find_by_id(&self, id: ContactId) -> ContactsResult<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                contact_id,
                name,
                email,
                address,
                phone,
                image,
                created_at,
                updated_at
            FROM contacts
            WHERE contact_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ContactRow::into_contact))
    }

    async fn update_by_id(&self, id: ContactId, update: &ContactUpdate) -> ContactsResult<bool> {
        // email/address/phone are replaced as a unit; name/image only when given.
        let result = sqlx::query(
            r#"
            UPDATE contacts SET
                name = COALESCE($2, name),
                email = $3,
                address = $4,
                phone = $5,
                image = COALESCE($6, image),
                updated_at = NOW()
            WHERE contact_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(&update.name)
        .bind(&update.contact.email)
        .bind(&update.contact.address)
        .bind(&update.contact.phone)
        .bind(&update.image)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: ContactId) -> ContactsResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE contact_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    contact_id: Uuid,
    name: Option<String>,
    email: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: ContactId::from_uuid(self.contact_id),
            name: self.name,
            contact: ContactInfo {
                email: self.email,
                address: self.address,
                phone: self.phone,
            },
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
