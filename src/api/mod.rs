//! API service HTTP API

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::ApiState;

/// Build the API service router using the provided state
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/string", get(handlers::get_string))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
