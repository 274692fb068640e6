//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure aggregation step of the fit: the power sums
//! that populate the quadratic normal equations. It holds no fitting logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Power-sum aggregation.
pub mod power_sums;
