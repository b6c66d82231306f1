//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register / Login
// ============================================================================

/// Body of both `POST /register` and `POST /login`
///
/// Fields are optional so that an absent field is reported as a missing
/// field rather than a generic body error.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_request_partial() {
        let req: CredentialsRequest = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("a"));
        assert!(req.password.is_none());
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            message: "User Authenticated".to_string(),
            token: "t".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "User Authenticated", "token": "t" })
        );
    }
}
