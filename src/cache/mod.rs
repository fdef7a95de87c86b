//! Memoization of exercise results
//!
//! Services depend on the narrow [`ResultCache`] capability rather than a
//! concrete store; the eviction policy belongs to the implementation.
//! [`LruResultCache`] is the size-bounded store the server runs with.

use sha2::{Digest, Sha256};
use std::fmt;

pub mod lru_cache;

pub use lru_cache::LruResultCache;

use crate::errors::CacheResult;

/// Minimal get/set contract for a result store
pub trait ResultCache<V>: Send + Sync {
    /// Look up a previously stored result
    fn get(&self, key: &ContentHash) -> Option<V>;

    /// Store a result, possibly evicting another entry
    fn set(&self, key: ContentHash, value: V) -> CacheResult<()>;
}

/// SHA-256 digest of an exercise input
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Digest of a single byte string
    pub fn of(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    /// Start a digest over several length-framed fields
    pub fn builder(domain: &str) -> ContentHasher {
        ContentHasher::new(domain)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}

/// Incremental [`ContentHash`] builder
///
/// Every field is prefixed with its length so that `["ab", "c"]` and
/// `["a", "bc"]` hash differently.
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    fn new(domain: &str) -> Self {
        let hasher = Self {
            hasher: Sha256::new(),
        };
        hasher.field(domain.as_bytes())
    }

    pub fn field(mut self, bytes: &[u8]) -> Self {
        self.hasher.update((bytes.len() as u64).to_le_bytes());
        self.hasher.update(bytes);
        self
    }

    pub fn finish(self) -> ContentHash {
        ContentHash(self.hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            ContentHash::of(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fields_are_framed() {
        let left = ContentHash::builder("t").field(b"ab").field(b"c").finish();
        let right = ContentHash::builder("t").field(b"a").field(b"bc").finish();
        assert_ne!(left, right);
    }

    #[test]
    fn test_domains_are_separated() {
        let left = ContentHash::builder("substring").field(b"x").finish();
        let right = ContentHash::builder("autocomplete").field(b"x").finish();
        assert_ne!(left, right);
    }

    #[test]
    fn test_display_is_hex() {
        let hash = ContentHash::of(b"");
        assert_eq!(hash.to_string().len(), 64);
        assert_eq!(hash.to_string(), hash.to_hex());
    }
}
