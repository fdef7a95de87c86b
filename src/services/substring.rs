use std::sync::Arc;
use tracing::debug;

use crate::cache::ResultCache;
use crate::errors::AppResult;
use crate::models::SubstringQuery;
use crate::substring::longest_substring_length;

/// Memoized longest-substring lookups
#[derive(Clone)]
pub struct SubstringService {
    cache: Arc<dyn ResultCache<usize>>,
}

impl SubstringService {
    pub fn new(cache: Arc<dyn ResultCache<usize>>) -> Self {
        Self { cache }
    }

    pub fn longest_substring(&self, query: &SubstringQuery) -> AppResult<usize> {
        let key = query.content_hash();
        if let Some(length) = self.cache.get(&key) {
            debug!(key = %key, length, "Substring cache hit");
            return Ok(length);
        }

        let length = longest_substring_length(query.bound, &query.text);
        debug!(
            key = %key,
            bound = query.bound,
            text_len = query.text.len(),
            length,
            "Substring cache miss, computed result"
        );
        self.cache.set(key, length)?;
        Ok(length)
    }
}
