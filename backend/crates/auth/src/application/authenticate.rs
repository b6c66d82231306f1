//! Authenticate Use Case
//!
//! Turns a raw bearer token into the caller's identity.

use std::sync::Arc;

use kernel::identity::Identity;
use platform::token::TokenSigner;

use crate::domain::value_object::token_claims::TokenClaims;
use crate::error::AuthResult;

/// Verifies bearer tokens. Signature validity is the only check; there is
/// no session store to consult.
#[derive(Clone)]
pub struct AuthenticateUseCase {
    signer: Arc<TokenSigner>,
}

impl AuthenticateUseCase {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }

    pub fn execute(&self, token: &str) -> AuthResult<Identity> {
        let claims: TokenClaims = self.signer.verify(token)?;
        Ok(claims.into_identity())
    }
}
