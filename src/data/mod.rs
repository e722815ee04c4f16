//! Data service HTTP API

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::DataState;

/// Build the data service router using the provided state
pub fn create_router(state: DataState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/message", get(handlers::read_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
