use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
};
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::models::UploadReceipt;
use crate::web::AppState;

use super::rejection_error;

const FILE_FIELD: &str = "file";

/// `POST /upload` with a multipart `file` field
///
/// Other fields are skipped. The first `file` field is stored and its
/// receipt returned.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadReceipt>> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected upload request");
        rejection_error(
            rejection.status(),
            format!("Couldn't parse file: {}", rejection.body_text()),
        )
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| AppError::validation("Couldn't parse file: missing file name"))?;
        let data = field.bytes().await.map_err(multipart_error)?;

        let receipt = state.upload_storage.save(&file_name, &data).await?;
        return Ok(Json(receipt));
    }

    warn!("Upload request without a file field");
    Err(AppError::validation(format!(
        "Couldn't parse file: no \"{FILE_FIELD}\" field in multipart body"
    )))
}

fn multipart_error(error: MultipartError) -> AppError {
    rejection_error(
        error.status(),
        format!("Couldn't parse file: {}", error.body_text()),
    )
}
