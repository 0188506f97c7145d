//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and the token-level utilities
//! used by the delimited-text fronts. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Delimiter split/join utilities.
pub mod tokens;
