//! Memoizing services
//!
//! Each service pairs a pure exercise with an injected [`ResultCache`]:
//! hash the input, return a hit, otherwise compute, store and return.
//!
//! [`ResultCache`]: crate::cache::ResultCache

pub mod autocomplete;
pub mod substring;

pub use autocomplete::AutocompleteService;
pub use substring::SubstringService;
