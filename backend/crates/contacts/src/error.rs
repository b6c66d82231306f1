//! Contacts Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contacts-specific result type alias
pub type ContactsResult<T> = Result<T, ContactsError>;

/// Contacts-specific error variants
#[derive(Debug, Error)]
pub enum ContactsError {
    /// Path segment is not a contact id
    #[error("Invalid contact id: {0}")]
    InvalidId(String),

    /// Body is not JSON of the expected shape
    #[error("{0}")]
    InvalidBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContactsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactsError::InvalidId(_) | ContactsError::InvalidBody(_) => ErrorKind::BadRequest,
            ContactsError::Database(_) => ErrorKind::InternalServerError,
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

    fn log(&self) {
        match self {
            ContactsError::Database(e) => {
                tracing::error!(error = %e, "Contacts database error");
            }
            _ => {
                tracing::debug!(error = %self, "Contacts error");
            }
        }
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for ContactsError {
    fn from(rejection: JsonRejection) -> Self {
        ContactsError::InvalidBody(rejection.body_text())
    }
}
