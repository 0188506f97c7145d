//! Bubble sorting over sequences of comparable elements.
//!
//! ## Purpose
//!
//! This module provides the shared bubble-sort core and its three fronts:
//! element sequences, character strings, and delimiter-joined token strings.
//!
//! ## Design notes
//!
//! * **Value semantics**: Every front sorts an owned local copy and returns
//!   it; caller data is never mutated.
//! * **Comparison polarity**: The ascending swap trigger is `left > right`,
//!   the descending trigger is `left < right`. With `PartialOrd` elements,
//!   comparisons involving NaN are false and never trigger a swap.
//! * **No early exit**: The classic n−1 passes are always performed; an
//!   already-sorted fast path would not change observable output.
//!
//! ## Key concepts
//!
//! * **Bubble sort**: Pass `i` sweeps adjacent pairs over indices
//!   `0..n-1-i`, swapping each out-of-order pair, so the largest remaining
//!   element settles at the end of the unsorted region after each pass.
//! * **Lexicographic token order**: The delimited front compares whole
//!   tokens as strings; empty tokens sort before all non-empty tokens.
//!
//! ## Invariants
//!
//! * Output is a permutation of the input.
//! * The delimited front changes token order only; token count and token
//!   contents are preserved, including empty tokens.
//!
//! ## Non-goals
//!
//! * This module makes no performance guarantee beyond O(n²) worst case.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::tokens::{join_tokens, split_tokens};

// ============================================================================
// Sort Order
// ============================================================================

/// Direction of a bubble sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Non-decreasing output; swap trigger is `left > right`.
    Ascending,
    /// Non-increasing output; swap trigger is `left < right`.
    Descending,
}

// ============================================================================
// Bubble Sort Core
// ============================================================================

/// Bubble sort `items` in place in the given direction.
///
/// Performs n−1 passes; pass `i` sweeps adjacent pairs over indices
/// `0..n-1-i` and swaps every pair for which the trigger comparison holds.
fn bubble_sort<T: PartialOrd>(items: &mut [T], order: SortOrder) {
    let n = items.len();
    if n < 2 {
        return;
    }

    for pass in 0..n - 1 {
        for j in 0..n - 1 - pass {
            let out_of_order = match order {
                SortOrder::Ascending => items[j] > items[j + 1],
                SortOrder::Descending => items[j] < items[j + 1],
            };
            if out_of_order {
                items.swap(j, j + 1);
            }
        }
    }
}

// ============================================================================
// Sorting Fronts
// ============================================================================

/// Sort a sequence of comparable elements into non-decreasing order.
///
/// Returns a sorted copy; the input is left untouched. Empty and
/// single-element sequences are returned unchanged.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(sort_ascending(&[5, 9, 8, 7, 5]), vec![5, 5, 7, 8, 9]);
/// assert_eq!(sort_ascending(&["shaw", "kailash"]), vec!["kailash", "shaw"]);
/// ```
pub fn sort_ascending<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    bubble_sort(&mut sorted, SortOrder::Ascending);
    sorted
}

/// Sort a sequence of comparable elements into non-increasing order.
///
/// The inverted-trigger counterpart of [`sort_ascending`].
pub fn sort_descending<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    bubble_sort(&mut sorted, SortOrder::Descending);
    sorted
}

/// Sort the characters of a string into non-decreasing order.
///
/// Decomposes `text` into characters, bubble-sorts them, and reassembles a
/// string of identical character length.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(sort_chars_ascending("51654"), "14556");
/// ```
pub fn sort_chars_ascending(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    bubble_sort(&mut chars, SortOrder::Ascending);
    chars.into_iter().collect()
}

/// Sort the tokens of a delimiter-joined string into lexicographic order.
///
/// Splits on `delimiter`, bubble-sorts the tokens, and rejoins with the same
/// delimiter. Token count and token contents are unchanged; only token order
/// changes. Empty tokens from leading, trailing, or adjacent delimiters sort
/// before all non-empty tokens.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(sort_delimited_ascending("5,1,8,9,7", ','), "1,5,7,8,9");
/// ```
pub fn sort_delimited_ascending(text: &str, delimiter: char) -> String {
    let mut tokens = split_tokens(text, delimiter);
    bubble_sort(&mut tokens, SortOrder::Ascending);
    join_tokens(&tokens, delimiter)
}
