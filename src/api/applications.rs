//! Application submission handler

use crate::api::utils::JsonBody;
use crate::auth::BearerCredential;
use crate::error::AppError;
use crate::models::{ErrorResponse, SubmitRequest, SubmitResponse};
use axum::Json;

// POST /submit-application - Acknowledge an application without processing it
#[utoipa::path(
    post,
    path = "/submit-application",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Application accepted", body = SubmitResponse),
        (status = 401, description = "Invalid or missing token", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "applications"
)]
pub async fn submit_application(
    credential: BearerCredential,
    JsonBody(request): JsonBody<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    // The body extractor has already run, so body errors take precedence
    credential.authorize()?;

    tracing::info!(
        application_id = %request.application_id,
        amount = request.amount,
        "Application submitted"
    );

    Ok(Json(SubmitResponse::submitted(request.application_id)))
}
