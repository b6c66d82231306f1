//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use platform::token::TokenSigner;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret for signing bearer tokens
    pub token_secret: Vec<u8>,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
        }
    }

    /// Create config with a random token secret (for development and tests)
    pub fn development() -> Self {
        Self::new(platform::crypto::random_secret())
    }

    /// Build the signer for this secret
    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Claims {
        sub: String,
    }

    #[test]
    fn test_development_secrets_are_distinct() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert_ne!(a.token_secret, b.token_secret);

        let token = a
            .token_signer()
            .issue(&Claims { sub: "a".into() })
            .unwrap();
        assert!(b.token_signer().verify::<Claims>(&token).is_err());
        assert_eq!(
            a.token_signer().verify::<Claims>(&token).unwrap(),
            Claims { sub: "a".into() }
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("plain-secret");
        assert!(!format!("{config:?}").contains("plain-secret"));
    }
}
