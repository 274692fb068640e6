//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer turns power sums into fitted coefficients. The only algorithm is
//! the closed-form Cramer's-rule solution of the quadratic normal equations.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cramer's-rule solver and the `Coefficients` result type.
pub mod cramer;
