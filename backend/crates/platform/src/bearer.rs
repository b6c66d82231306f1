//! `Authorization: Bearer <token>` parsing

use axum::http::{HeaderMap, header};

/// Result of inspecting the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerCredential<'a> {
    /// Header not sent
    Missing,
    /// Header sent but not a usable `Bearer <token>` value
    Malformed,
    /// Raw token text
    Token(&'a str),
}

/// Extract the bearer token from request headers.
///
/// The scheme is matched case-insensitively; surrounding whitespace is ignored.
pub fn extract_bearer(headers: &HeaderMap) -> BearerCredential<'_> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return BearerCredential::Missing;
    };

    let Ok(value) = value.to_str() else {
        return BearerCredential::Malformed;
    };

    let Some((scheme, token)) = value.trim().split_once(' ') else {
        return BearerCredential::Malformed;
    };

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() || token.contains(' ') {
        return BearerCredential::Malformed;
    }

    BearerCredential::Token(token)
}
