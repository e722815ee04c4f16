//! API service handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::ApiState;
use crate::error::Error;

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "api-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Fetch the message from the data service, relabeled under `result`
pub async fn get_string(State(state): State<ApiState>) -> Result<Json<StringResponse>, Error> {
    let response = state
        .client
        .get(&state.downstream_url)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to reach data service");
            Error::upstream(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, "data service returned an error status");
        return Err(Error::upstream(status.to_string()));
    }

    let payload: serde_json::Value = response.json().await.map_err(|_| Error::InvalidResponse)?;

    let message = payload
        .get("message")
        .and_then(serde_json::Value::as_str)
        .ok_or(Error::MissingField("message"))?;

    Ok(Json(StringResponse {
        result: message.to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct StringResponse {
    pub result: String,
}
