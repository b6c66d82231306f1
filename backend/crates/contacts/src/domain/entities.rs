//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::ContactId;

/// Reachability details, stored and replaced as one unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Contact entity
///
/// Every user-supplied field is optional; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: Option<String>, contact: ContactInfo, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ContactId::new(),
            name,
            contact,
            image,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Replacement values for an existing contact
///
/// `contact` replaces the stored [`ContactInfo`] wholesale, so an omitted
/// email, address or phone is cleared. `name` and `image` are only written
/// when present.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub image: Option<String>,
}

impl ContactUpdate {
    /// Apply to a stored contact, stamping `updated_at`
    pub fn apply(&self, target: &mut Contact, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            target.name = Some(name.clone());
        }
        target.contact = self.contact.clone();
        if let Some(image) = &self.image {
            target.image = Some(image.clone());
        }
        target.updated_at = now;
    }
}
