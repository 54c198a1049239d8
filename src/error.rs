//! Error types and error handling for the application
//!
//! Every failure is terminal for its request and is rendered as a JSON body of
//! the form `{"detail": "..."}`, the shape clients of the mock already parse.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Credential rejected: wrong OTP, or a missing/malformed bearer token
    #[error("{0}")]
    Unauthorized(String),

    /// Request body could not be decoded into the expected shape
    #[error("{0}")]
    Validation(String),

    /// No route matches the request path
    #[error("{0}")]
    NotFound(String),

    /// The path exists but not for this HTTP method
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error while handling request");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unauthorized_renders_detail() {
        let (status, body) = render(AppError::Unauthorized("Invalid OTP".to_string())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "Invalid OTP" }));
    }

    #[tokio::test]
    async fn test_validation_is_unprocessable() {
        let (status, body) = render(AppError::Validation("missing field `otp`".to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "missing field `otp`");
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("secret cause"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal Server Error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("Not Found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed("Method Not Allowed".to_string()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Unauthorized(String::new()).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
