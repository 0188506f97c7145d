//! Extremum linear scans.
//!
//! ## Purpose
//!
//! This module finds the minimum or maximum element of a non-empty sequence
//! with a single linear pass.
//!
//! ## Design notes
//!
//! * **Explicit failure**: An empty sequence is a typed error, not a
//!   first-element access on nothing.
//! * **Comparison polarity**: The minimum scan keeps the candidate when
//!   `candidate < best`; the maximum scan when `candidate > best`. With
//!   `PartialOrd` elements, comparisons involving NaN are false, so a NaN
//!   candidate never displaces the running extremum.
//!
//! ## Invariants
//!
//! * The returned element is equal to some input element.
//! * Exactly one pass over the input; the first element seeds the scan.
//!
//! ## Non-goals
//!
//! * This module does not return the index of the extremum.

// Internal dependencies
use crate::primitives::errors::SequenceError;

// ============================================================================
// Extremum Scans
// ============================================================================

/// Find the smallest element of a non-empty sequence.
///
/// Seeds with the first element, then keeps the smaller of the running best
/// and each candidate.
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(find_minimum(&[5, 9, 7, 5, 1, 6, 8, 9, 7]), Ok(1));
/// assert_eq!(find_minimum::<i32>(&[]), Err(SequenceError::EmptyInput));
/// ```
pub fn find_minimum<T: PartialOrd + Clone>(items: &[T]) -> Result<T, SequenceError> {
    let mut iter = items.iter();
    let mut best = iter.next().ok_or(SequenceError::EmptyInput)?;

    for candidate in iter {
        if candidate < best {
            best = candidate;
        }
    }

    Ok(best.clone())
}

/// Find the largest element of a non-empty sequence.
///
/// The inverted-polarity counterpart of [`find_minimum`].
///
/// ```rust
/// use sequtil::prelude::*;
///
/// assert_eq!(find_maximum(&[5, 9, 7, 5, 1, 6, 8, 9, 7]), Ok(9));
/// ```
pub fn find_maximum<T: PartialOrd + Clone>(items: &[T]) -> Result<T, SequenceError> {
    let mut iter = items.iter();
    let mut best = iter.next().ok_or(SequenceError::EmptyInput)?;

    for candidate in iter {
        if candidate > best {
            best = candidate;
        }
    }

    Ok(best.clone())
}
