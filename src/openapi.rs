//! OpenAPI document for the mock
//!
//! The raw document is served at `/openapi.json`, with Swagger UI at `/docs`
//! and ReDoc at `/redoc` reading the same spec.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the JSON document
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Swagger UI mount point
pub const SWAGGER_UI_PATH: &str = "/docs";
/// ReDoc page path
pub const REDOC_PATH: &str = "/redoc";

/// Registers the bearer scheme referenced by protected routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Any value starting with `mock-token-` is accepted.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI spec for every route
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Enterprise API",
        description = "Canned enterprise backend for integration tests and demos."
    ),
    paths(
        crate::api::system::root,
        crate::api::system::health,
        crate::api::auth::login,
        crate::api::auth::get_profile,
        crate::api::applications::submit_application,
    ),
    components(schemas(
        crate::models::LoginRequest,
        crate::models::TokenResponse,
        crate::models::ProfileResponse,
        crate::models::SubmitRequest,
        crate::models::SubmitResponse,
        crate::models::MessageResponse,
        crate::models::HealthResponse,
        crate::models::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "system", description = "Welcome and liveness"),
        (name = "auth", description = "Mock login and profile"),
        (name = "applications", description = "Application submission"),
    )
)]
pub struct ApiDoc;

/// Routes serving the document and both documentation UIs
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
}
