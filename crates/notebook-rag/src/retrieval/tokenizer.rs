//! Text normalization for lexical matching
//!
//! The model is presence/absence: downstream consumers collapse the token
//! sequence into a set and term frequency is intentionally discarded.

use std::collections::HashSet;

/// Tokenize text into normalized terms
///
/// Lower-cases the input, maps every character outside `[a-z0-9]` to a space,
/// and splits on whitespace runs. Pure and locale-unaware.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenize text and collapse duplicates into a term set
pub fn term_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
