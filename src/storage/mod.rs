//! Local storage for uploaded files

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::errors::{StorageError, StorageResult};
use crate::models::UploadReceipt;

/// Writes uploads into a single directory
#[derive(Debug, Clone)]
pub struct UploadStorage {
    upload_dir: PathBuf,
}

impl UploadStorage {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory; succeeds when it already exists
    pub async fn ensure_storage_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|source| StorageError::DirectoryCreation {
                path: self.upload_dir.clone(),
                source,
            })
    }

    /// Store `data` under the final component of the client supplied
    /// `file_name`, replacing any previous upload with that name
    pub async fn save(&self, file_name: &str, data: &[u8]) -> StorageResult<UploadReceipt> {
        let file_name = sanitize_file_name(file_name)?;
        self.ensure_storage_dir().await?;

        let file_path = self.upload_dir.join(&file_name);
        fs::write(&file_path, data)
            .await
            .map_err(|source| StorageError::Write {
                path: file_path.clone(),
                source,
            })?;

        info!(
            file_name = %file_name,
            size = data.len(),
            path = %file_path.display(),
            "Stored uploaded file"
        );

        Ok(UploadReceipt {
            file_name,
            size: data.len() as u64,
        })
    }
}

/// Reduce a client supplied name to a bare file name
///
/// Both `/` and `\` are treated as separators so that a Windows style path
/// cannot smuggle a directory through on Unix.
pub fn sanitize_file_name(name: &str) -> StorageResult<String> {
    if name.contains('\0') {
        return Err(StorageError::invalid_file_name(name, "contains null bytes"));
    }

    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    match base {
        "" => Err(StorageError::invalid_file_name(name, "empty file name")),
        "." | ".." => Err(StorageError::invalid_file_name(
            name,
            "refers to a directory",
        )),
        base => Ok(base.to_string()),
    }
}
