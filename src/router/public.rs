//! Public routes that don't require authentication.

use axum::{Router, routing::get};

use crate::app_state::AppState;
use crate::constants::api::OPENAPI_PATH;
use crate::handlers::health;
use crate::openapi::openapi_json;

/// Build public routes that don't require authentication.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(OPENAPI_PATH, get(openapi_json))
}
