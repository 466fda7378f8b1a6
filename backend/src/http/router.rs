//! Router configuration for the HTTP API.
//!
//! This module binds the comic resource paths to their handlers and wraps
//! them in middleware (tracing, request timeout, `Connection: close`).

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/health", get(handlers::health_check))
        // Create
        .route("/comic", post(handlers::create_comic).put(handlers::create_comic))
        // Empty id segment
        .route(
            "/comic/",
            get(handlers::missing_id)
                .put(handlers::missing_id)
                .delete(handlers::missing_id),
        )
        // Read, update, delete
        .route(
            "/comic/{id}",
            get(handlers::get_comic)
                .put(handlers::update_comic)
                .delete(handlers::delete_comic),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::CONNECTION,
            HeaderValue::from_static("close"),
        ))
        .with_state(state)
}
