//! Contacts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Contact entity, update shape, repository trait
//! - `application/` - One use case per CRUD operation
//! - `infra/` - PostgreSQL and in-memory contact stores
//! - `presentation/` - HTTP handlers, DTOs, route entries
//!
//! Every route is mounted behind the bearer gate. Contacts are not owned:
//! any authenticated caller sees and edits the whole collection.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContactsError, ContactsResult};
pub use infra::{memory::InMemoryContactRepository, postgres::PgContactRepository};
pub use presentation::handlers::ContactsAppState;
pub use presentation::router::contact_routes;
