//! HTTP response types and utilities
//!
//! This module provides standardized response types and error handling
//! for the web layer, ensuring consistent error bodies across all endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::{AppError, StorageError};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Status code for each error category
pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AppError::Storage(StorageError::InvalidFileName { .. }) => StatusCode::BAD_REQUEST,
        AppError::Storage(_)
        | AppError::Cache(_)
        | AppError::Configuration { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let status = status_for(&error);
    let message = match &error {
        AppError::Validation { message } | AppError::PayloadTooLarge { message } => {
            message.clone()
        }
        AppError::Storage(StorageError::InvalidFileName { .. }) => error.to_string(),
        AppError::Storage(_) => "Couldn't store uploaded file".to_string(),
        AppError::Cache(_) => "Cache write failed".to_string(),
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            "Internal server error".to_string()
        }
    };

    if error.is_client_error() {
        debug!(status = status.as_u16(), error = %error, "Request rejected");
    } else {
        error!(status = status.as_u16(), error = %error, "Request failed");
    }

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

/// Service health payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

impl HealthResponse {
    pub fn healthy(start_time: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: (chrono::Utc::now() - start_time).num_seconds(),
        }
    }
}
