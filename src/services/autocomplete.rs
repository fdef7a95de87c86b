use std::sync::Arc;
use tracing::debug;

use crate::autocomplete::complete;
use crate::cache::ResultCache;
use crate::errors::AppResult;
use crate::models::AutocompleteRequest;

/// Memoized prefix completion
#[derive(Clone)]
pub struct AutocompleteService {
    cache: Arc<dyn ResultCache<Vec<String>>>,
}

impl AutocompleteService {
    pub fn new(cache: Arc<dyn ResultCache<Vec<String>>>) -> Self {
        Self { cache }
    }

    pub fn complete(&self, request: &AutocompleteRequest) -> AppResult<Vec<String>> {
        let key = request.content_hash();
        if let Some(matches) = self.cache.get(&key) {
            debug!(key = %key, matches = matches.len(), "Autocomplete cache hit");
            return Ok(matches);
        }

        let matches = complete(&request.string, &request.dictionary);
        debug!(
            key = %key,
            dictionary = request.dictionary.len(),
            matches = matches.len(),
            "Autocomplete cache miss, computed result"
        );
        self.cache.set(key, matches.clone())?;
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LruResultCache;

    fn request(prefix: &str, words: &[&str]) -> AutocompleteRequest {
        AutocompleteRequest {
            string: prefix.to_string(),
            dictionary: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_complete_and_cache() {
        let cache = Arc::new(LruResultCache::new(4).unwrap());
        let service = AutocompleteService::new(cache.clone());
        let request = request("de", &["dog", "deer", "deal"]);

        let matches = service.complete(&request).unwrap();
        assert_eq!(matches, vec!["deer", "deal"]);
        assert_eq!(cache.get(&request.content_hash()), Some(matches));
    }

    #[test]
    fn test_same_prefix_different_dictionary() {
        let service = AutocompleteService::new(Arc::new(LruResultCache::new(4).unwrap()));

        assert_eq!(
            service.complete(&request("de", &["deer"])).unwrap(),
            vec!["deer"]
        );
        assert_eq!(
            service.complete(&request("de", &["deal", "dog"])).unwrap(),
            vec!["deal"]
        );
    }
}
