//! Closed-form quadratic least squares.
//!
//! ## Purpose
//!
//! This module solves the 3×3 normal equations of an unweighted quadratic fit
//! directly from the power sums, by Cramer's rule. Each coefficient is a ratio
//! of two determinants; all three share the determinant of the coefficient
//! matrix as denominator.
//!
//! ## Design notes
//!
//! * **No decomposition**: The determinants are expanded symbolically; there is
//!   no pivoting, QR, or SVD fallback.
//! * **Permissive**: Fewer than three distinct `x` is not detected. The
//!   determinant is zero only when the power sums are exact, in which case the
//!   division yields infinities or NaN. Otherwise rounding leaves a tiny nonzero
//!   determinant and the returned coefficients are finite and meaningless.
//!
//! ## Key concepts
//!
//! With `sⱼ = Σ xʲ` and `tⱼ = Σ xʲ·y`, the system is
//!
//! ```text
//! | s0 s1 s2 |   | c |   | t0 |
//! | s1 s2 s3 | · | b | = | t1 |
//! | s2 s3 s4 |   | a |   | t2 |
//! ```
//!
//! and its determinant is
//! `D = s0·s2·s4 − s1²·s4 − s0·s3² + 2·s1·s2·s3 − s2³`.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::math::power_sums::PowerSums;
use crate::primitives::sample::Sample;

// ============================================================================
// Coefficients
// ============================================================================

/// Coefficients of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients<T> {
    /// Quadratic term.
    pub a: T,
    /// Linear term.
    pub b: T,
    /// Constant term.
    pub c: T,
}

impl<T: Float> Coefficients<T> {
    /// Create coefficients from their components.
    #[inline]
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Evaluate the fitted curve at `x` (Horner form).
    #[inline]
    pub fn eval(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    /// Whether all three coefficients are finite.
    ///
    /// A fit over fewer than three distinct `x` values yields non-finite
    /// coefficients only when its power sums are exact (for example integer
    /// `x`). With rounded sums the coefficients are finite and still
    /// meaningless, so this check alone does not detect degenerate input.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Coefficients as the ordered triple `[a, b, c]`.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.a, self.b, self.c]
    }
}

impl<T> From<[T; 3]> for Coefficients<T> {
    #[inline]
    fn from([a, b, c]: [T; 3]) -> Self {
        Self { a, b, c }
    }
}

impl<T> From<Coefficients<T>> for [T; 3] {
    #[inline]
    fn from(coeffs: Coefficients<T>) -> Self {
        [coeffs.a, coeffs.b, coeffs.c]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Coefficients<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coefficients:")?;
        writeln!(f, "  a = {}", self.a)?;
        writeln!(f, "  b = {}", self.b)?;
        write!(f, "  c = {}", self.c)
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Determinant of the normal-equation matrix.
#[inline]
pub fn determinant<T: Float>(sums: &PowerSums<T>) -> T {
    let [s0, s1, s2, s3, s4] = sums.x_pow;
    let two = T::one() + T::one();

    s0 * s2 * s4 - s1 * s1 * s4 - s0 * s3 * s3 + two * s1 * s2 * s3 - s2 * s2 * s2
}

/// Solve the normal equations for `(a, b, c)`.
pub fn solve<T: Float>(sums: &PowerSums<T>) -> Coefficients<T> {
    let [s0, s1, s2, s3, s4] = sums.x_pow;
    let [t0, t1, t2] = sums.xy_pow;
    let det = determinant(sums);

    log::trace!(
        "solving quadratic normal equations (n = {:?}, det = {:?})",
        s0.to_f64(),
        det.to_f64()
    );

    // Column 3 (x²) replaced by the right-hand side.
    let a = (t2 * s0 * s2 - t1 * s0 * s3 - t2 * s1 * s1 + t1 * s1 * s2 + t0 * s1 * s3
        - t0 * s2 * s2)
        / det;

    // Column 2 (x) replaced by the right-hand side.
    let b = (t1 * s0 * s4 - t0 * s1 * s4 + t0 * s2 * s3 - t2 * s0 * s3 - t1 * s2 * s2
        + t2 * s1 * s2)
        / det;

    // Column 1 (1) replaced by the right-hand side.
    let c = (t0 * s2 * s4 - t1 * s1 * s4 - t0 * s3 * s3 + t1 * s2 * s3 + t2 * s1 * s3
        - t2 * s2 * s2)
        / det;

    Coefficients { a, b, c }
}

/// Fit `y = a·x² + b·x + c` to `samples`.
#[inline]
pub fn fit<T: Float>(samples: &[Sample<T>]) -> Coefficients<T> {
    solve(&PowerSums::accumulate(samples))
}
