//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes a fit: residual-based quality metrics computed
//! from the samples and the fitted coefficients.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual diagnostics (RSS, R², RMSE).
pub mod diagnostics;
