//! Value Object Module

pub mod token_claims;
pub mod user_id;
