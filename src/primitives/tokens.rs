//! Token utilities for delimited text.
//!
//! ## Purpose
//!
//! This module provides the split/join pair used by the delimited-text
//! fronts of the sorting and deduplication algorithms.
//!
//! ## Design notes
//!
//! * **Empty tokens are real tokens**: Splitting keeps the empty tokens
//!   produced by leading, trailing, or adjacent delimiters, so that joining
//!   the unmodified token list reproduces the input exactly.
//! * **Borrowed tokens**: Splitting borrows from the input; no allocation
//!   happens until the final join.
//!
//! ## Invariants
//!
//! * For every `text` and `delimiter`:
//!   `join_tokens(&split_tokens(text, delimiter), delimiter) == text`.
//! * The empty string splits into exactly one empty token.
//!
//! ## Non-goals
//!
//! * This module does not trim, normalize, or validate tokens.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// ============================================================================
// Split / Join
// ============================================================================

/// Split `text` on `delimiter` into borrowed tokens.
///
/// Leading, trailing, and adjacent delimiters produce empty tokens; the
/// empty string produces a single empty token.
#[inline]
pub fn split_tokens(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter).collect()
}

/// Join `tokens` with `delimiter` into an owned string.
#[inline]
pub fn join_tokens(tokens: &[&str], delimiter: char) -> String {
    let mut joined = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push(delimiter);
        }
        joined.push_str(token);
    }
    joined
}
