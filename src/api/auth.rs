//! Login and profile handlers

use crate::api::utils::JsonBody;
use crate::auth::{issue_token, verify_otp, BearerCredential, TOKEN_TYPE};
use crate::error::AppError;
use crate::models::{ErrorResponse, LoginRequest, ProfileResponse, TokenResponse};
use axum::Json;

// POST /login - Exchange a username and OTP for a mock token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid OTP", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if let Err(e) = verify_otp(&request.otp) {
        tracing::warn!(username = %request.username, "Login rejected: invalid OTP");
        return Err(e);
    }

    let access_token = issue_token();
    tracing::info!(username = %request.username, "Issued mock token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: TOKEN_TYPE.to_string(),
    }))
}

// GET /profile - Fixed demo profile for any mock-shaped token
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Demo profile", body = ProfileResponse),
        (status = 401, description = "Invalid or missing token", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_profile(credential: BearerCredential) -> Result<Json<ProfileResponse>, AppError> {
    credential.authorize()?;
    Ok(Json(ProfileResponse::demo()))
}
