//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::ContactId;
use serde::{Deserialize, Serialize};

use crate::application::CreateContactInput;
use crate::domain::entities::{Contact, ContactInfo, ContactUpdate};

/// Body of POST /contacts and PATCH /contacts/{id}
///
/// Flat on the wire; `email`, `address` and `phone` are grouped on the way in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

impl ContactRequest {
    pub fn into_create_input(self) -> CreateContactInput {
        let (name, contact, image) = self.split();
        CreateContactInput {
            name,
            contact,
            image,
        }
    }

    pub fn into_update(self) -> ContactUpdate {
        let (name, contact, image) = self.split();
        ContactUpdate {
            name,
            contact,
            image,
        }
    }

    fn split(self) -> (Option<String>, ContactInfo, Option<String>) {
        let contact = ContactInfo {
            email: self.email,
            address: self.address,
            phone: self.phone,
        };
        (self.name, contact, self.image)
    }
}

/// A stored contact as the frontend reads it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub name: Option<String>,
    pub contact: ContactInfoResponse,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfoResponse {
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            contact: ContactInfoResponse {
                email: contact.contact.email,
                address: contact.contact.address,
                phone: contact.contact.phone,
            },
            image: contact.image,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Confirmation for create, update and delete
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub message: &'static str,
    pub date: DateTime<Utc>,
}

impl ActionResponse {
    pub fn now(message: &'static str) -> Self {
        Self {
            message,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_partial_body() {
        let req: ContactRequest = serde_json::from_str(r#"{"name":"Ann","phone":"555"}"#).unwrap();
        let update = req.into_update();
        assert_eq!(update.name.as_deref(), Some("Ann"));
        assert_eq!(update.contact.phone.as_deref(), Some("555"));
        assert!(update.contact.email.is_none());
        assert!(update.image.is_none());
    }

    #[test]
    fn test_response_uses_underscore_id_and_camel_case() {
        let contact = Contact::new(Some("Ann".into()), ContactInfo::default(), None);
        let id = contact.id;
        let json = serde_json::to_value(ContactResponse::from(contact)).unwrap();

        assert_eq!(json["_id"], id.to_string());
        assert_eq!(json["name"], "Ann");
        assert!(json["contact"]["email"].is_null());
        assert!(json["image"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_action_response_date_is_rfc3339() {
        let json = serde_json::to_value(ActionResponse::now("Contact is deleted")).unwrap();
        let date = json["date"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(date).is_ok());
    }
}
