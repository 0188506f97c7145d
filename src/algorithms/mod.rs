//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core sequence algorithms: bubble sorting,
//! order-preserving deduplication, and extremum scans. Each function is a
//! pure transform over a caller-owned sequence.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sorting over elements, characters, and delimited tokens.
pub mod sorting;

/// Order-preserving deduplication.
pub mod dedup;

/// Minimum/maximum linear scans.
pub mod extremum;
