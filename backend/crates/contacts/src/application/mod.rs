//! Application Layer - Use Cases
//!
//! One use case per contact operation. Each takes the caller's
//! [`kernel::identity::Identity`] for the audit log only.

pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod update_contact;

pub use create_contact::{CreateContactInput, CreateContactUseCase};
pub use delete_contact::DeleteContactUseCase;
pub use get_contact::GetContactUseCase;
pub use list_contacts::ListContactsUseCase;
pub use update_contact::UpdateContactUseCase;
