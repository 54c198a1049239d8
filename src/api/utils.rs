//! API utility functions

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;

/// JSON request body with FastAPI-style content negotiation.
///
/// A body is decoded as JSON when the request has no `Content-Type` at all, or
/// when its subtype is `json` or ends in `+json`. Any other content type, and
/// any body that does not decode into `T`, is rejected with
/// [`AppError::Validation`] (422).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody<T>(pub T);

/// Whether the request headers allow the body to be read as JSON
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((_, subtype)) => {
            let subtype = subtype.to_ascii_lowercase();
            subtype == "json" || subtype.ends_with("+json")
        }
        None => false,
    }
}

/// Decode raw body bytes, reporting failures as validation errors
pub fn decode_json<T: DeserializeOwned>(headers: &HeaderMap, bytes: &[u8]) -> Result<T, AppError> {
    if !accepts_json(headers) {
        tracing::debug!("Rejected request body with non-JSON content type");
        return Err(AppError::Validation(
            "Request body must be JSON".to_string(),
        ));
    }
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::Validation(format!("Invalid request body: {}", e))
    })
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        decode_json(&headers, &bytes).map(JsonBody)
    }
}
