use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http::StatusCode;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::routes::{advisory, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/advisory", advisory::router())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Last-resort boundary: anything that escapes a handler is logged and
/// answered with a generic 500, distinct from the advisory error variant.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Unhandled panic in request handler: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
