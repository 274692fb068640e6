//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures the rest of the crate is built on:
//! - `Sample`, a single `(x, y)` observation
//! - `SampleStore`, the ordered collection of samples
//! - `FitError`, the crate's error type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Single `(x, y)` sample.
pub mod sample;

/// Ordered sample storage.
pub mod store;
