//! Order-preserving deduplication.
//!
//! ## Purpose
//!
//! This module removes repeated elements from a sequence while keeping the
//! first occurrence of each distinct element in its original relative
//! position. Fronts are provided for element sequences, character strings,
//! and delimiter-joined token strings.
//!
//! ## Design notes
//!
//! * **First-occurrence order**: The result is a subsequence of the input;
//!   this is dedup, not sort-plus-dedup.
//! * **Linear membership**: Each element is checked against the result built
//!   so far, O(n²) worst case. A set-backed check would require `Hash + Eq`
//!   and would close the functions to float elements, so `PartialEq`
//!   membership is used instead.
//!
//! ## Invariants
//!
//! * No element appears more than once in the output.
//! * Every output element is a member of the input.
//! * Relative order of retained elements matches the input.
//!
//! ## Non-goals
//!
//! * This module does not sort; see `algorithms::sorting`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::tokens::{join_tokens, split_tokens};

// ============================================================================
// Deduplication Fronts
// ============================================================================

/// Remove repeated elements, keeping first occurrences in original order.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(dedup_preserving_order(&[1, 5, 6, 4, 5]), vec![1, 5, 6, 4]);
/// assert_eq!(
///     dedup_preserving_order(&["kailash", "shaw", "kailash"]),
///     vec!["kailash", "shaw"]
/// );
/// ```
pub fn dedup_preserving_order<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Remove repeated characters from a string, keeping first occurrences.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(dedup_chars("hello"), "helo");
/// ```
pub fn dedup_chars(text: &str) -> String {
    let mut result = String::new();
    for c in text.chars() {
        if !result.contains(c) {
            result.push(c);
        }
    }
    result
}

/// Remove repeated tokens from a delimiter-joined string.
///
/// Splits on `delimiter`, keeps the first occurrence of each distinct token
/// in original order, and rejoins with the same delimiter.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(dedup_delimited("1,5,6,4,5", ','), "1,5,6,4");
/// ```
pub fn dedup_delimited(text: &str, delimiter: char) -> String {
    let tokens = split_tokens(text, delimiter);
    let mut kept: Vec<&str> = Vec::new();
    for token in tokens {
        if !kept.contains(&token) {
            kept.push(token);
        }
    }
    join_tokens(&kept, delimiter)
}
