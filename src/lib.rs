//! # sequtil — Basic sequence utilities for Rust
//!
//! A small, pure library of reference implementations of classic sequence
//! algorithms: O(n²) bubble sorting, order-preserving linear-scan
//! deduplication, and linear-scan extremum search. Every function is a
//! side-effect-free transform over a caller-owned sequence of comparable
//! elements — characters, string tokens, or numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use sequtil::prelude::*;
//!
//! // Bubble sort over any comparable elements
//! let sorted = sort_ascending(&[5, 1, 8, 9, 7]);
//! assert_eq!(sorted, vec![1, 5, 7, 8, 9]);
//!
//! // Character-level sorting of a string
//! assert_eq!(sort_chars_ascending("51654"), "14556");
//!
//! // Delimited tokens: sort or deduplicate, preserving token contents
//! assert_eq!(sort_delimited_ascending("5,1,8,9,7", ','), "1,5,7,8,9");
//! assert_eq!(dedup_delimited("1,5,6,4,5", ','), "1,5,6,4");
//!
//! // Extremum scans fail explicitly on empty input
//! let min = find_minimum(&[5, 9, 7, 5, 1, 6, 8, 9, 7])?;
//! assert_eq!(min, 1);
//! # Result::<(), SequenceError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Only the extremum scans have a failure mode: an empty input sequence
//! yields `Err(SequenceError::EmptyInput)` rather than a sentinel value.
//! Every other function is total over its input domain, including empty and
//! single-element sequences.
//!
//! ```rust
//! use sequtil::prelude::*;
//!
//! let empty: Vec<i32> = vec![];
//! assert_eq!(find_minimum(&empty), Err(SequenceError::EmptyInput));
//! ```
//!
//! ## Value Semantics
//!
//! No function mutates its input or retains a reference after returning.
//! Sorting and deduplication operate on an owned local copy and hand the
//! result back to the caller. All functions are synchronous, reentrant, and
//! free of shared state, so concurrent calls need no coordination.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (heap allocation via `alloc` is
//! still required for the owned results):
//!
//! ```toml
//! [dependencies]
//! sequtil = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types and token utilities.
mod primitives;

// Layer 2: Algorithms - sorting, deduplication, and extremum scans.
mod algorithms;

// Standard sequence-utilities prelude.
pub mod prelude {
    pub use crate::algorithms::dedup::{dedup_chars, dedup_delimited, dedup_preserving_order};
    pub use crate::algorithms::extremum::{find_maximum, find_minimum};
    pub use crate::algorithms::sorting::{
        sort_ascending, sort_chars_ascending, sort_delimited_ascending, sort_descending,
    };
    pub use crate::primitives::errors::SequenceError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}
