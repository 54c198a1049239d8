//! Mock Enterprise API
//!
//! A stand-in for a small enterprise backend: OTP login, profile lookup,
//! application submission and a health probe, all answering canned JSON.
//! Credentials are checked by shape only; see [`auth`].
//!
//! The router is built explicitly by [`app`] and carries no shared state, so
//! every request is handled independently.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with all routes and middleware
pub fn app() -> Router {
    Router::new()
        .route("/", get(api::system::root))
        .route("/health", get(api::system::health))
        .route("/login", post(api::auth::login))
        .route("/profile", get(api::auth::get_profile))
        .route(
            "/submit-application",
            post(api::applications::submit_application),
        )
        .merge(openapi::docs_router())
        .fallback(api::system::not_found)
        .method_not_allowed_fallback(api::system::method_not_allowed)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
}
