//! Signed bearer tokens
//!
//! HS256 JSON Web Tokens over a shared server secret. Tokens carry no `exp`
//! claim and are valid for as long as the secret is unchanged.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The only accepted signing algorithm.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature does not match (tampered, or signed with another secret)
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Not a decodable JWT, wrong algorithm, or claims of the wrong shape
    #[error("Token is malformed: {0}")]
    Malformed(String),

    /// Claims could not be encoded
    #[error("Token could not be issued: {0}")]
    Encoding(String),
}

/// Issues and verifies tokens with one symmetric key.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // No expiry is issued, so none is required or checked.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims` into a compact JWT
    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(TOKEN_ALGORITHM), claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Check the signature and decode the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &TOKEN_ALGORITHM)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
