//! Error types for sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during sequence
//! transforms. The crate has exactly one failure mode: an extremum scan over
//! an empty sequence.
//!
//! ## Design notes
//!
//! * **Explicit**: Empty input to an extremum scan is a typed error, never a
//!   sentinel value or a panic.
//! * **No-std**: Supports `no_std` environments; `std::error::Error` is
//!   implemented only when `std` is enabled.
//!
//! ## Invariants
//!
//! * Every other operation in the crate is total over its input domain and
//!   has no variant here.
//!
//! ## Non-goals
//!
//! * This module does not perform any input checking itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Input sequence is empty; extremum scans require at least 1 element.
    EmptyInput,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SequenceError {}
