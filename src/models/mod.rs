//! Request and response types shared by services and handlers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cache::ContentHash;
use crate::errors::AppError;

/// A validated `"<k>,<s>"` substring request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringQuery {
    /// Maximum number of distinct characters
    pub bound: usize,
    pub text: String,
}

impl SubstringQuery {
    pub fn new<S: Into<String>>(bound: usize, text: S) -> Self {
        Self {
            bound,
            text: text.into(),
        }
    }

    /// Cache key covering both the bound and the text
    pub fn content_hash(&self) -> ContentHash {
        ContentHash::builder("substring")
            .field(&(self.bound as u64).to_le_bytes())
            .field(self.text.as_bytes())
            .finish()
    }
}

impl FromStr for SubstringQuery {
    type Err = AppError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = body.split(',').collect();
        let [bound, text] = fields.as_slice() else {
            return Err(AppError::validation(format!(
                "expected a body of the form \"<k>,<s>\" with exactly 2 fields, got {}",
                fields.len()
            )));
        };

        let bound: i64 = bound
            .trim()
            .parse()
            .map_err(|e| AppError::validation(format!("invalid bound {bound:?}: {e}")))?;
        let bound = usize::try_from(bound).map_err(|_| {
            AppError::validation(format!("bound must be non-negative, got {bound}"))
        })?;

        Ok(Self::new(bound, *text))
    }
}

/// Body of an autocomplete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteRequest {
    /// Prefix to complete
    pub string: String,
    #[serde(default)]
    pub dictionary: Vec<String>,
}

impl AutocompleteRequest {
    /// Cache key covering the prefix and every dictionary word
    pub fn content_hash(&self) -> ContentHash {
        let mut hasher = ContentHash::builder("autocomplete")
            .field(self.string.as_bytes())
            .field(&(self.dictionary.len() as u64).to_le_bytes());
        for word in &self.dictionary {
            hasher = hasher.field(word.as_bytes());
        }
        hasher.finish()
    }
}

/// Returned after a file has been written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub file_name: String,
    pub size: u64,
}
