//! Prefix completion over a caller-supplied dictionary

/// Every word in `dictionary` that starts with `prefix`, in dictionary order
///
/// Words shorter than the prefix never match and an empty prefix matches
/// everything. Duplicates in the dictionary are kept.
pub fn complete(prefix: &str, dictionary: &[String]) -> Vec<String> {
    dictionary
        .iter()
        .filter(|word| word.starts_with(prefix))
        .cloned()
        .collect()
}
