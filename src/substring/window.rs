//! Observation-ordered window of distinct characters
//!
//! The window holds at most `capacity` distinct characters. Members are
//! ordered by their most recent observation, so the head is always the
//! character whose last occurrence lies furthest back in the input. That is
//! the member to drop when a new distinct character arrives: every position
//! up to and including its last occurrence falls out of the run.

use lru::LruCache;
use std::num::NonZeroUsize;

/// Outcome of admitting one character into a [`Window`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Already tracked; the character is now the most recently observed member
    Duplicate,
    /// New, and the window had room for it
    Inserted,
    /// New, and the window was full so its stalest member was dropped
    InsertedWithEviction(Eviction),
}

/// The member dropped by an [`Admission::InsertedWithEviction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    pub character: char,
    /// Position of the evicted character's last observation
    pub last_seen: usize,
}

/// Bounded set of distinct characters with O(1) membership and eviction
#[derive(Debug)]
pub struct Window {
    // char -> position of its last observation
    members: LruCache<char, usize>,
}

impl Window {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            members: LruCache::new(capacity),
        }
    }

    /// Admit the character observed at `position`
    pub fn admit(&mut self, character: char, position: usize) -> Admission {
        if let Some(last_seen) = self.members.get_mut(&character) {
            *last_seen = position;
            return Admission::Duplicate;
        }

        // `push` only hands back an entry for a new key when it had to evict one
        match self.members.push(character, position) {
            Some((character, last_seen)) => Admission::InsertedWithEviction(Eviction {
                character,
                last_seen,
            }),
            None => Admission::Inserted,
        }
    }

    /// Number of distinct characters currently tracked
    pub fn len(&self) -> usize {
        self.members.len()
    }
}
