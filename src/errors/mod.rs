//! Centralized error handling for the kata server
//!
//! # Error Categories
//!
//! - **Validation Errors**: malformed request bodies, negative bounds
//! - **Cache Errors**: result cache construction and lock failures
//! - **Storage Errors**: upload file name and filesystem failures
//!
//! # Usage
//!
//! ```rust
//! use kata_server::errors::{AppError, AppResult};
//!
//! fn parse_bound(field: &str) -> AppResult<usize> {
//!     field
//!         .parse()
//!         .map_err(|_| AppError::validation(format!("invalid bound {field:?}")))
//! }
//!
//! assert_eq!(parse_bound("3").unwrap(), 3);
//! assert!(parse_bound("x").is_err());
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Cache Results
pub type CacheResult<T> = Result<T, CacheError>;

/// Convenience type alias for Storage Results
pub type StorageResult<T> = Result<T, StorageError>;
