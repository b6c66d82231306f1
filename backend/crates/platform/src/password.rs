//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random salt and fixed cost parameters
//! - Zeroization of clear text on drop
//! - Constant-time verification (inside `argon2`)
//!
//! The service accepts any password the client sends; there is no length or
//! strength policy here.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Cost parameters
// ============================================================================

/// Memory cost in KiB (19 MiB)
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Iterations
pub const ARGON2_ITERATIONS: u32 = 2;

/// Lanes
pub const ARGON2_PARALLELISM: u32 = 1;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("p".to_string());
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password, NFKC-normalizing it so that visually identical input
    /// from different keyboards hashes the same.
    pub fn new(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let hash = hasher()?
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The string carries algorithm, version, parameters, salt and digest, so a
/// stored hash keeps verifying even if the cost constants change later.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Parameters come from the PHC string; comparison is constant-time.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("p".to_string());
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password));

        let wrong_password = ClearTextPassword::new("wrong".to_string());
        assert!(!hashed.verify(&wrong_password));
    }

    #[test]
    fn test_hash_is_not_plaintext_and_salted() {
        let password = ClearTextPassword::new("hunter2".to_string());
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert!(!first.as_phc_string().contains("hunter2"));
        assert!(first.as_phc_string().starts_with("$argon2id$"));
        assert_ne!(first, second, "Salts must differ between hashes");
    }

    #[test]
    fn test_fixed_cost_parameters() {
        let hashed = ClearTextPassword::new("p".to_string()).hash().unwrap();
        assert!(hashed.as_phc_string().contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth "ｐ" normalizes to ASCII "p"
        let hashed = ClearTextPassword::new("\u{ff50}".to_string()).hash().unwrap();
        assert!(hashed.verify(&ClearTextPassword::new("p".to_string())));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = password.hash().unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash().unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
