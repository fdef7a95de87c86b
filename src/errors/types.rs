//! Error type definitions for the kata server
//!
//! The hierarchy mirrors the layers of the service: storage and cache
//! failures are their own enums and fold into [`AppError`], which is what
//! services and handlers return.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any exercise ran
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Request body exceeded the configured limit
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// Result cache failures
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Upload storage failures
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result cache specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// A cache must be able to hold at least one entry
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,

    /// Another thread panicked while holding the cache lock
    #[error("Cache lock poisoned")]
    Poisoned,
}

/// Upload storage specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Client supplied a file name that cannot be stored safely
    #[error("Invalid file name {name:?}: {reason}")]
    InvalidFileName { name: String, reason: String },

    /// Upload directory could not be created
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the uploaded bytes failed
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a payload too large error
    pub fn payload_too_large<S: Into<String>>(message: S) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the client's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::PayloadTooLarge { .. }
                | Self::Storage(StorageError::InvalidFileName { .. })
        )
    }
}

impl StorageError {
    /// Create an invalid file name error
    pub fn invalid_file_name<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
