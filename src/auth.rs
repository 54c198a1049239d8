//! Mock credentials
//!
//! The OTP check compares against a fixed code and tokens are accepted by
//! shape alone: any value starting with [`TOKEN_PREFIX`] passes, whether or not
//! `/login` ever issued it. Nothing is stored server-side, so tokens cannot be
//! revoked. This is intentionally insecure and must stay that way; clients of
//! the mock rely on forged `mock-token-*` values being accepted.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::convert::Infallible;
use uuid::Uuid;

/// The only OTP `/login` accepts
pub const MOCK_OTP: &str = "123456";

/// Prefix every issued (and every accepted) token carries
pub const TOKEN_PREFIX: &str = "mock-token-";

/// Literal removed from the `Authorization` header value
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token type reported by `/login`
pub const TOKEN_TYPE: &str = "bearer";

const INVALID_OTP: &str = "Invalid OTP";
const INVALID_TOKEN: &str = "Invalid or missing token";

/// Check a submitted OTP against [`MOCK_OTP`]
pub fn verify_otp(otp: &str) -> Result<(), AppError> {
    if otp == MOCK_OTP {
        Ok(())
    } else {
        Err(AppError::Unauthorized(INVALID_OTP.to_string()))
    }
}

/// Generate a fresh token: the prefix followed by a v4 UUID
pub fn issue_token() -> String {
    format!("{}{}", TOKEN_PREFIX, Uuid::new_v4())
}

/// Turn a raw `Authorization` header value into a candidate token.
///
/// Empty values count as absent. Every occurrence of `"Bearer "` is removed,
/// not only a leading one.
pub fn strip_bearer(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(value.replace(BEARER_PREFIX, ""))
}

/// Shared token validator used by every protected route.
///
/// Fails when the token is absent, empty, or lacks [`TOKEN_PREFIX`].
pub fn validate_token(token: Option<&str>) -> Result<(), AppError> {
    match token {
        Some(t) if !t.is_empty() && t.starts_with(TOKEN_PREFIX) => Ok(()),
        _ => Err(AppError::Unauthorized(INVALID_TOKEN.to_string())),
    }
}

/// Candidate token taken from the optional `Authorization` header.
///
/// Extraction never fails; handlers call [`BearerCredential::authorize`] once
/// the request body has been accepted, so body errors are reported first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerCredential(pub Option<String>);

impl BearerCredential {
    /// Read the candidate token from request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(strip_bearer);
        Self(token)
    }

    /// Run the shared validator against this credential
    pub fn authorize(&self) -> Result<(), AppError> {
        validate_token(self.0.as_deref()).map_err(|e| {
            tracing::warn!(
                has_token = self.0.is_some(),
                "Rejected request with invalid or missing token"
            );
            e
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
