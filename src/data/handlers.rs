//! Data service handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::data::DataState;
use crate::error::Error;

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "data-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Fetch the lowest-id message
pub async fn read_message(
    State(state): State<DataState>,
) -> Result<Json<MessageResponse>, Error> {
    let content = state.store.fetch_first_message().await?;

    let message = content.ok_or(Error::NotFound)?;

    Ok(Json(MessageResponse { message }))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
