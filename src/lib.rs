//! # quadfit — Closed-form least-squares quadratic fitting for Rust
//!
//! A small, `no_std`-capable primitive that fits `y = a·x² + b·x + c` to a set of
//! `(x, y)` samples by ordinary (unweighted) least squares.
//!
//! ## How it works
//!
//! 1. Samples are appended to a store, in any order.
//! 2. On request, five power sums of `x` (`Σ x⁰ … Σ x⁴`) and three cross sums
//!    (`Σ y`, `Σ x·y`, `Σ x²·y`) are accumulated in one pass.
//! 3. Those eight sums are the entries of the 3×3 normal equations, which are
//!    solved in closed form by Cramer's rule.
//!
//! There is no iteration and no matrix decomposition: the cost of a fit is one
//! linear pass over the samples plus a fixed amount of arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadfit::prelude::*;
//!
//! let (a, b, c) = (1.23, -9.87, 0.01);
//!
//! let mut fit = QuadraticFit::<f64>::with_capacity(3);
//! for x in [-1.0, 0.0, 1.0] {
//!     fit.add(x, a * x * x + b * x + c);
//! }
//!
//! let coeffs = fit.compute();
//! assert!((coeffs[0] - a).abs() < 1e-12);
//! assert!((coeffs[1] - b).abs() < 1e-12);
//! assert!((coeffs[2] - c).abs() < 1e-12);
//! ```
//!
//! ## Result and Error Handling
//!
//! Fitting itself never fails. Positional access does:
//!
//! ```rust
//! use quadfit::prelude::*;
//!
//! let mut fit = QuadraticFit::<f64>::new();
//! fit.add(0.5, 1.0);
//!
//! match fit.at(3) {
//!     Ok(sample) => println!("({}, {})", sample.x, sample.y),
//!     Err(e) => eprintln!("{}", e), // sample index 3 out of range for store of length 1
//! }
//! ```
//!
//! ## Degenerate Input
//!
//! The fit needs at least three samples at three distinct `x` values. With fewer,
//! the determinant of the normal equations is zero in exact arithmetic, but this
//! is not detected. When every power sum is exactly representable (integer `x`,
//! or all samples at one `x`) the determinant rounds to zero and the coefficients
//! come out infinite or NaN, which [`Coefficients::is_finite`] reports:
//!
//! ```rust
//! use quadfit::prelude::*;
//!
//! let mut fit = QuadraticFit::<f64>::new();
//! fit.add(2.0, 1.0);
//! fit.add(2.0, 3.0);
//! fit.add(2.0, 5.0);
//!
//! assert!(!fit.coefficients().is_finite());
//! ```
//!
//! In general the sums carry rounding error, the determinant comes out tiny but
//! nonzero, and the coefficients are finite and meaningless. `is_finite` does not
//! catch that case; counting distinct `x` values is up to the caller.
//!
//! ```rust
//! use quadfit::prelude::*;
//!
//! let mut fit = QuadraticFit::<f64>::new();
//! fit.add(0.1, 1.0);
//! fit.add(0.7, 3.0);
//!
//! let det = determinant(&fit.power_sums());
//! assert!(det != 0.0 && det.abs() < 1e-12);
//! assert!(fit.coefficients().is_finite());
//! ```
//!
//! ## Diagnostics
//!
//! ```rust
//! use quadfit::prelude::*;
//!
//! let fit: QuadraticFit<f64> = (0..10)
//!     .map(|i| i as f64)
//!     .map(|x| (x, 2.0 * x * x - 3.0 * x + 1.0))
//!     .collect();
//!
//! let diag = fit.diagnostics();
//! assert!((diag.r_squared - 1.0).abs() < 1e-9);
//! println!("{}", diag);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! quadfit = { version = "0.1", default-features = false }
//! ```
//!
//! Floating-point functions are then provided by `libm`.
//!
//! ## References
//!
//! - Ask Dr. Math, "Least-Squares Quadratic Regression":
//!   <http://mathforum.org/library/drmath/view/72047.html> (the closed-form
//!   Cramer's-rule expressions used by the solver).
//!
//! [`Coefficients::is_finite`]: crate::prelude::Coefficients::is_finite

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains `Sample`, `SampleStore`, and the `FitError` type.
mod primitives;

// Layer 2: Math - pure aggregation.
//
// Contains the power sums that populate the normal equations.
mod math;

// Layer 3: Algorithms - coefficient computation.
//
// Contains the closed-form Cramer's-rule solver.
mod algorithms;

// Layer 4: Evaluation - post-processing.
//
// Contains residual diagnostics (RSS, R^2, RMSE).
mod evaluation;

// High-level API.
//
// Provides `QuadraticFit`, the store-plus-solver entry point.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard quadfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use quadfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Coefficients, FitDiagnostics, FitError, PowerSums, QuadraticFit, Sample, SampleStore,
        determinant, fit, solve,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
