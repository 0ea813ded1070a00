//! Credential extraction for inbound requests.
//!
//! The service performs no authorization of its own: the bearer token
//! presented by the dashboard caller is forwarded as-is to the viz API.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use thiserror::Error;
use viz_client::Credentials;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not valid UTF-8")]
    InvalidHeader,

    #[error("Authorization header is not a bearer token")]
    NotBearer,

    #[error("bearer token is empty")]
    EmptyToken,
}

/// Extracts the caller's bearer credentials from the request headers.
pub fn extract_credentials(headers: &HeaderMap) -> Result<Credentials, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = value.to_str().map_err(|_| AuthError::InvalidHeader)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::NotBearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::NotBearer);
    }

    Credentials::bearer(token.trim()).map_err(|_| AuthError::EmptyToken)
}
