//! Longest run with at most `k` distinct characters

use std::collections::HashMap;
use std::num::NonZeroUsize;

use super::window::{Admission, Eviction, Window};

/// Length, in characters, of the longest substring of `text` that contains at
/// most `bound` distinct characters
///
/// ```
/// use kata_server::substring::longest_substring_length;
///
/// assert_eq!(longest_substring_length(2, "abcba"), 3);
/// assert_eq!(longest_substring_length(0, "abcba"), 0);
/// ```
pub fn longest_substring_length(bound: usize, text: &str) -> usize {
    let characters: Vec<char> = text.chars().collect();
    // Nothing is ever evicted, and the window is never sized past the input
    if bound >= characters.len() {
        return characters.len();
    }
    let Some(capacity) = NonZeroUsize::new(bound) else {
        return 0;
    };

    let mut tracker = RunTracker::new(&characters, capacity);
    for (position, &character) in characters.iter().enumerate() {
        tracker.observe(position, character);
    }
    tracker.finish()
}

/// Drives a [`Window`] across the input and records the length of every run
/// closed by an eviction
struct RunTracker<'a> {
    text: &'a [char],
    window: Window,
    /// Repeat observations inside the current run, per window member
    duplicates: HashMap<char, usize>,
    duplicate_total: usize,
    run_start: usize,
    longest: usize,
}

impl<'a> RunTracker<'a> {
    fn new(text: &'a [char], capacity: NonZeroUsize) -> Self {
        Self {
            text,
            window: Window::new(capacity),
            duplicates: HashMap::with_capacity(capacity.get().min(text.len())),
            duplicate_total: 0,
            run_start: 0,
            longest: 0,
        }
    }

    fn observe(&mut self, position: usize, character: char) {
        match self.window.admit(character, position) {
            Admission::Duplicate => {
                *self.duplicates.entry(character).or_insert(0) += 1;
                self.duplicate_total += 1;
            }
            Admission::Inserted => {
                self.duplicates.insert(character, 0);
            }
            Admission::InsertedWithEviction(eviction) => {
                let run = self.window.len() + self.duplicate_total;
                debug_assert_eq!(run, position - self.run_start);
                self.longest = self.longest.max(run);

                self.close_run(eviction);
                self.duplicates.insert(character, 0);
            }
        }
    }

    /// Move the run start just past the evicted character's last occurrence
    fn close_run(&mut self, eviction: Eviction) {
        // Every other character in the dropped prefix occurs again later, so
        // its counter only loses repeats and never underflows.
        let text = self.text;
        for &dropped in &text[self.run_start..eviction.last_seen] {
            if dropped == eviction.character {
                continue;
            }
            if let Some(count) = self.duplicates.get_mut(&dropped) {
                *count -= 1;
                self.duplicate_total -= 1;
            }
        }

        if let Some(count) = self.duplicates.remove(&eviction.character) {
            self.duplicate_total -= count;
        }
        self.run_start = eviction.last_seen + 1;
    }

    /// Flush the run still open at the end of the input
    fn finish(self) -> usize {
        let run = self.window.len() + self.duplicate_total;
        debug_assert_eq!(run, self.text.len() - self.run_start);
        self.longest.max(run)
    }
}
