//! Error types for msgrelay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error calling data service: {0}")]
    Upstream(String),

    #[error("Invalid JSON from data service")]
    InvalidResponse,

    #[error("Data service response missing '{0}'")]
    MissingField(&'static str),

    #[error("No message found in database")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

impl Error {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Error::Upstream(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Error::Database(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidResponse | Error::MissingField(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Database variants carry the raw driver error text in `detail`.
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
