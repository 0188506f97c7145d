#![cfg(feature = "dev")]
//! Tests for token utilities.
//!
//! These tests verify the split/join pair used by the delimited-text fronts:
//! - Empty-token handling for leading, trailing, and adjacent delimiters
//! - Split/join round-trip integrity
//!
//! ## Test Organization
//!
//! 1. **Splitting** - token boundaries and empty tokens
//! 2. **Joining** - delimiter placement
//! 3. **Round-trip** - join(split(text)) == text

use sequtil::internals::primitives::tokens::{join_tokens, split_tokens};

// ============================================================================
// Splitting Tests
// ============================================================================

/// Test basic splitting on a comma.
///
/// Verifies token boundaries.
#[test]
fn test_split_basic() {
    assert_eq!(split_tokens("1,5,6", ','), vec!["1", "5", "6"]);
}

/// Test that adjacent delimiters produce empty tokens.
///
/// Verifies that empty tokens are kept, not collapsed.
#[test]
fn test_split_adjacent_delimiters() {
    assert_eq!(split_tokens("a,,b", ','), vec!["a", "", "b"]);
}

/// Test leading and trailing delimiters.
///
/// Verifies empty tokens at both ends.
#[test]
fn test_split_leading_trailing() {
    assert_eq!(split_tokens(",a,", ','), vec!["", "a", ""]);
}

/// Test splitting the empty string.
///
/// Verifies that it yields exactly one empty token.
#[test]
fn test_split_empty_string() {
    assert_eq!(split_tokens("", ','), vec![""]);
}

// ============================================================================
// Joining Tests
// ============================================================================

/// Test basic joining with a comma.
///
/// Verifies delimiter placement between tokens only.
#[test]
fn test_join_basic() {
    assert_eq!(join_tokens(&["1", "5", "6"], ','), "1,5,6");
}

/// Test joining a single token.
///
/// Verifies that no delimiter is emitted.
#[test]
fn test_join_single_token() {
    assert_eq!(join_tokens(&["a"], ','), "a");
}

/// Test joining empty tokens.
///
/// Verifies that empty tokens still contribute delimiter positions.
#[test]
fn test_join_empty_tokens() {
    assert_eq!(join_tokens(&["", "a", ""], ','), ",a,");
}

// ============================================================================
// Round-trip Tests
// ============================================================================

/// Test that join inverts split for arbitrary inputs.
///
/// Verifies the round-trip invariant, including empty-token cases.
#[test]
fn test_split_join_roundtrip() {
    for text in ["", ",", "a", "a,b", ",a,,b,", "x;y", "1,5,6,4,5"] {
        let tokens = split_tokens(text, ',');
        assert_eq!(
            join_tokens(&tokens, ','),
            text,
            "Round-trip should reproduce the input"
        );
    }
}
