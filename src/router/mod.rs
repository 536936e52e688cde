//! Router configuration module.

pub mod protected;
pub mod public;

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware::from_fn};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::middleware::request_logger_middleware;

pub use protected::protected_routes;
pub use public::public_routes;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let timeout = Duration::from_secs(app_state.config.request_timeout);

    public_routes()
        .merge(protected_routes(app_state.clone()))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    timeout,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route")
}
