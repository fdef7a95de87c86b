use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::models::SubstringQuery;
use crate::web::AppState;

use super::rejection_error;

/// `POST /substring` with a plain-text `"<k>,<s>"` body
///
/// Responds with the length of the longest substring of `s` holding at most
/// `k` distinct characters, as plain text.
pub async fn longest_substring(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<String> {
    let body =
        body.map_err(|rejection| rejection_error(rejection.status(), rejection.body_text()))?;
    let body = std::str::from_utf8(&body)
        .map_err(|e| AppError::validation(format!("request body is not valid UTF-8: {e}")))?;

    let query: SubstringQuery = body.parse().inspect_err(|e| {
        warn!(error = %e, "Rejected substring request");
    })?;

    // Large inputs are scanned off the async workers, still inside the request span
    let service = state.substring_service.clone();
    let span = tracing::Span::current();
    let length = tokio::task::spawn_blocking(move || {
        span.in_scope(|| service.longest_substring(&query))
    })
        .await
        .map_err(|e| AppError::internal(format!("substring computation aborted: {e}")))??;

    Ok(length.to_string())
}
