//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CredentialsRequest, LoginResponse, RegisterResponse};
use crate::presentation::middleware::BearerGate;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub signer: Arc<TokenSigner>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: &AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            signer: Arc::new(config.token_signer()),
        }
    }

    /// Middleware state sharing this state's signer
    pub fn gate(&self) -> BearerGate {
        BearerGate::new(self.signer.clone())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = RegisterInput {
        username: req.username.ok_or(AuthError::MissingField("username"))?,
        password: req.password.ok_or(AuthError::MissingField("password"))?,
    };

    RegisterUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok(Json(RegisterResponse {
        message: "user has been created successfully".to_string(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<LoginResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = LoginInput {
        username: req.username.ok_or(AuthError::MissingField("username"))?,
        password: req.password.ok_or(AuthError::MissingField("password"))?,
    };

    let output = LoginUseCase::new(state.repo.clone(), state.signer.clone())
        .execute(input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            message: "User Authenticated".to_string(),
            token: output.token,
        }),
    ))
}
