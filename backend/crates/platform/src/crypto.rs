//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Random 256-bit secret, base64 encoded, for development/test signing keys
pub fn random_secret() -> String {
    general_purpose::STANDARD.encode(random_bytes(32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_random_secret_is_unique() {
        let a = random_secret();
        let b = random_secret();
        assert_ne!(a, b);
        assert_eq!(general_purpose::STANDARD.decode(&a).unwrap().len(), 32);
    }
}
