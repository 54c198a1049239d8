//! Request and response bodies
//!
//! All types are request-scoped; nothing here outlives a single call.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Welcome text returned by `GET /`
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Mock Enterprise API. Please refer to the documentation for available endpoints.";

/// Status reported for every accepted application
pub const APPLICATION_STATUS_SUBMITTED: &str = "SUBMITTED";

/// Reported processing time in seconds. A fixed literal; no work is timed.
pub const PROCESSING_TIME_SEC: f64 = 1.5;

/// `POST /login` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Any username; content is not checked
    pub username: String,
    /// One-time password
    pub otp: String,
}

/// `POST /login` success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Freshly generated `mock-token-<uuid>`
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

/// `GET /profile` success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    /// User name
    pub user: String,
    /// User role
    pub role: String,
    /// Account status
    pub status: String,
}

impl ProfileResponse {
    /// The fixed demo profile every authorized caller sees
    pub fn demo() -> Self {
        Self {
            user: "demo-user".to_string(),
            role: "citizen".to_string(),
            status: "active".to_string(),
        }
    }
}

/// `POST /submit-application` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// Caller-chosen application identifier, echoed back
    pub application_id: String,
    /// Any number, including zero and negatives. Numeric strings are accepted.
    #[serde(deserialize_with = "lax_f64")]
    pub amount: f64,
}

/// Decode a float the way lax form validators do: JSON numbers, or strings
/// holding a number (surrounding whitespace ignored).
fn lax_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LaxF64;

    impl<'de> de::Visitor<'de> for LaxF64 {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(LaxF64)
}

/// `POST /submit-application` success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    /// Echo of the submitted id
    pub application_id: String,
    /// Always `SUBMITTED`
    pub status: String,
    /// Always [`PROCESSING_TIME_SEC`]
    pub processing_time_sec: f64,
}

impl SubmitResponse {
    /// Acknowledge a submission, echoing its id
    pub fn submitted(application_id: String) -> Self {
        Self {
            application_id,
            status: APPLICATION_STATUS_SUBMITTED.to_string(),
            processing_time_sec: PROCESSING_TIME_SEC,
        }
    }
}

/// `GET /` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Welcome text
    pub message: String,
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `UP`
    pub status: String,
}

impl HealthResponse {
    /// Liveness answer
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_request_accepts_integers_and_negatives() {
        let req: SubmitRequest =
            serde_json::from_value(json!({ "application_id": "APP-1", "amount": 500 })).unwrap();
        assert_eq!(req.amount, 500.0);

        let req: SubmitRequest =
            serde_json::from_value(json!({ "application_id": "APP-2", "amount": -12.5 })).unwrap();
        assert_eq!(req.amount, -12.5);
    }

    #[test]
    fn test_submit_request_accepts_numeric_strings() {
        let req: SubmitRequest =
            serde_json::from_value(json!({ "application_id": "APP-1", "amount": "500" })).unwrap();
        assert_eq!(req.amount, 500.0);

        let req: SubmitRequest =
            serde_json::from_value(json!({ "application_id": "APP-1", "amount": " -2.5 " })).unwrap();
        assert_eq!(req.amount, -2.5);

        assert!(serde_json::from_value::<SubmitRequest>(
            json!({ "application_id": "APP-1", "amount": "lots" })
        )
        .is_err());
        assert!(serde_json::from_value::<SubmitRequest>(
            json!({ "application_id": "APP-1", "amount": null })
        )
        .is_err());
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        assert!(serde_json::from_value::<LoginRequest>(json!({ "username": "a" })).is_err());
        assert!(serde_json::from_value::<LoginRequest>(json!({ "otp": "123456" })).is_err());
        // OTP must be a string, not a number
        assert!(
            serde_json::from_value::<LoginRequest>(json!({ "username": "a", "otp": 123456 }))
                .is_err()
        );
    }

    #[test]
    fn test_submit_response_serialization() {
        let value = serde_json::to_value(SubmitResponse::submitted("APP-1".to_string())).unwrap();
        assert_eq!(
            value,
            json!({
                "application_id": "APP-1",
                "status": "SUBMITTED",
                "processing_time_sec": 1.5
            })
        );
    }
}
