//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random secret generation
//! - Password hashing (Argon2id, fixed cost)
//! - Signed bearer tokens (HS256 JWT, no expiry)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
