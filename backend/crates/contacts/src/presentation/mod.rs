//! Presentation Layer - HTTP handlers, DTOs, route entries

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ContactsAppState;
pub use router::contact_routes;
