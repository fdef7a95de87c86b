use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::AutocompleteRequest;
use crate::web::AppState;

use super::rejection_error;

/// `POST /autocomplete` with `{"string": "...", "dictionary": [...]}`
///
/// Responds with the bare JSON array of dictionary words that start with
/// `string`.
pub async fn autocomplete(
    State(state): State<AppState>,
    payload: Result<Json<AutocompleteRequest>, JsonRejection>,
) -> AppResult<Json<Vec<String>>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected autocomplete request");
        rejection_error(
            rejection.status(),
            format!("Couldn't decode request body: {}", rejection.body_text()),
        )
    })?;

    let matches = state.autocomplete_service.complete(&request)?;
    Ok(Json(matches))
}
