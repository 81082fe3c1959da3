use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the persistence gateway.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Update or delete matched no document. Carries the entity name.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid identifier: {0}")]
    InvalidId(#[from] bson::oid::Error),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(String),

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
}

impl From<mongodb::error::Error> for RepoError {
    fn from(e: mongodb::error::Error) -> Self {
        RepoError::Database(e.to_string())
    }
}

/// Errors returned by HTTP handlers and the admin gate.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized: Invalid or missing API Key")]
    Unauthorized,

    #[error("Server configuration error: API_KEY not set")]
    ApiKeyNotConfigured,

    /// Failure reported with a fixed message; the cause is logged, not sent.
    #[error("{0}")]
    Internal(&'static str),

    /// Failure reported with the gateway's own message.
    #[error("{0}")]
    Repo(#[from] RepoError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::ApiKeyNotConfigured | ApiError::Internal(_) | ApiError::Repo(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
