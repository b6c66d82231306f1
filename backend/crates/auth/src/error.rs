//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login for a username that was never registered
    #[error("user not in system")]
    UserNotFound,

    /// Registration with a username that already exists
    #[error("Username already taken")]
    UserNameTaken,

    /// Wrong password
    #[error("invalid details")]
    InvalidCredentials,

    /// Required body field absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Body is not JSON of the expected shape
    #[error("{0}")]
    InvalidBody(String),

    /// No `Authorization` header
    #[error("Authorization token required")]
    MissingToken,

    /// Header present but not a valid bearer token
    #[error("Invalid or malformed token")]
    InvalidToken,

    /// Hashing or signing failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidToken => ErrorKind::Forbidden,
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::MissingField(_) | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::Crypto(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; the detail stays in the
    /// error source for logs.
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::internal("Internal server error").with_source(self)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Crypto(msg) | AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidBody(rejection.body_text())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::InvalidSignature
            | platform::token::TokenError::Malformed(_) => AuthError::InvalidToken,
            platform::token::TokenError::Encoding(msg) => AuthError::Crypto(msg),
        }
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Crypto(err.to_string())
    }
}
