//! User identifier
//!
//! Shared with the kernel so that [`kernel::identity::Identity`] and the
//! credential store agree on one type.

pub use kernel::id::UserId;
