//! Longest substring with a bounded number of distinct characters
//!
//! A window tracks the distinct characters of the current run and
//! [`longest_substring_length`] drives it over the input. Both are created per
//! call; nothing is shared between invocations.

mod tracker;
mod window;

pub use tracker::longest_substring_length;
