//! Domain Layer
//!
//! - Contact entity and its update shape
//! - Repository trait (interface)

pub mod entities;
pub mod repository;

pub use entities::{Contact, ContactInfo, ContactUpdate};
pub use repository::ContactRepository;
