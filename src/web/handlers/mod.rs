//! HTTP request handlers
//!
//! Handlers are thin: they turn the request into a model, hand it to a
//! service and shape the response. Extractor rejections are folded into
//! [`AppError`] so every failure carries the same JSON error body.

use axum::http::StatusCode;

use crate::errors::AppError;

pub mod autocomplete;
pub mod health;
pub mod substring;
pub mod upload;

/// Map an axum extractor rejection onto the application error type
pub(crate) fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(message)
    } else {
        AppError::validation(message)
    }
}
