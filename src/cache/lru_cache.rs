//! Size-bounded in-memory result cache

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use tracing::warn;

use super::{ContentHash, ResultCache};
use crate::errors::{CacheError, CacheResult};

/// LRU result cache shared across request handlers
///
/// The lock is held for a single lookup or insert, never while a result is
/// being computed.
pub struct LruResultCache<V> {
    entries: Mutex<LruCache<ContentHash, V>>,
}

impl<V> LruResultCache<V> {
    pub fn new(capacity: usize) -> CacheResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
        })
    }
}

impl<V> ResultCache<V> for LruResultCache<V>
where
    V: Clone + Send,
{
    fn get(&self, key: &ContentHash) -> Option<V> {
        match self.entries.lock() {
            Ok(mut entries) => entries.get(key).cloned(),
            Err(_) => {
                warn!(key = %key, "Result cache lock poisoned, treating lookup as a miss");
                None
            }
        }
    }

    fn set(&self, key: ContentHash, value: V) -> CacheResult<()> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.put(key, value);
        Ok(())
    }
}
