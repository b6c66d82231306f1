//! Infrastructure Layer - Contact stores

pub mod memory;
pub mod postgres;

pub use memory::InMemoryContactRepository;
pub use postgres::PgContactRepository;
