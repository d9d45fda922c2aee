use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("City not found: {0}")]
    UpstreamNotFound(String),

    #[error("Weather provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid weather observation: {0}")]
    InvalidObservation(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the upstream provider definitively does not know the city.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::UpstreamNotFound(_))
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UpstreamNotFound(ref e) => {
                tracing::info!("Upstream reported unknown city: {}", e);
                (StatusCode::NOT_FOUND, "City not found")
            }
            AppError::UpstreamUnavailable(ref e) => {
                tracing::error!("Weather provider error: {}", e);
                (StatusCode::BAD_GATEWAY, "Weather service error")
            }
            AppError::InvalidObservation(ref e) => {
                tracing::error!("Invalid observation from provider: {}", e);
                (StatusCode::BAD_GATEWAY, "Weather service returned incomplete data")
            }
            AppError::Cache(ref e) => {
                tracing::warn!("Cache error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Cache error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
