//! Auth Middleware
//!
//! Gate for protected routes: extracts the bearer token, verifies it, and
//! attaches the caller's [`Identity`] to the request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::identity::Identity;
use platform::bearer::{BearerCredential, extract_bearer};
use platform::token::TokenSigner;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerGate {
    use_case: AuthenticateUseCase,
}

impl BearerGate {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self {
            use_case: AuthenticateUseCase::new(signer),
        }
    }
}

/// Middleware that requires a valid bearer token
///
/// - no `Authorization` header: 401
/// - malformed header or failed verification: 403
///
/// Install with `route_layer` so unmatched paths still 404 instead of 401.
pub async fn require_bearer(
    State(gate): State<BearerGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity: Identity = match extract_bearer(req.headers()) {
        BearerCredential::Missing => return Err(AuthError::MissingToken),
        BearerCredential::Malformed => return Err(AuthError::InvalidToken),
        BearerCredential::Token(token) => gate.use_case.execute(token)?,
    };

    tracing::debug!(user_id = %identity.user_id, "Bearer token accepted");

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
