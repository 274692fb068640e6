//! Power-sum aggregation for quadratic normal equations.
//!
//! ## Purpose
//!
//! This module accumulates the eight sums that make up the normal-equation
//! system of an unweighted quadratic least-squares fit:
//!
//! * `Σ x^j` for `j = 0..=4` (the coefficient matrix)
//! * `Σ x^j·y` for `j = 0..=2` (the right-hand side)
//!
//! ## Design notes
//!
//! * **Single pass**: All eight sums are gathered in one sweep over the samples.
//! * **Incremental powers**: `x²`, `x³`, `x⁴` are built by repeated multiplication
//!   rather than `powi`.
//! * **Order-independent**: Sums do not depend on insertion order beyond
//!   floating-point rounding.
//!
//! ## Non-goals
//!
//! * Centering or scaling `x` before accumulation.
//! * Weighted sums.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// PowerSums
// ============================================================================

/// The aggregates of a quadratic normal-equation system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSums<T> {
    /// `x_pow[j] = Σ x^j` for `j = 0..=4`. `x_pow[0]` is the sample count.
    pub x_pow: [T; 5],
    /// `xy_pow[j] = Σ x^j·y` for `j = 0..=2`.
    pub xy_pow: [T; 3],
}

impl<T: Float> PowerSums<T> {
    /// Sums over an empty sample set (all zero).
    #[inline]
    pub fn zero() -> Self {
        Self {
            x_pow: [T::zero(); 5],
            xy_pow: [T::zero(); 3],
        }
    }

    /// Accumulate power sums over `samples`.
    pub fn accumulate(samples: &[Sample<T>]) -> Self {
        let mut s_1 = T::zero();
        let mut s_x = T::zero();
        let mut s_x2 = T::zero();
        let mut s_x3 = T::zero();
        let mut s_x4 = T::zero();
        let mut s_y = T::zero();
        let mut s_xy = T::zero();
        let mut s_x2y = T::zero();

        for &Sample { x, y } in samples {
            let x2 = x * x;

            s_1 = s_1 + T::one();
            s_x = s_x + x;
            s_x2 = s_x2 + x2;
            s_x3 = s_x3 + x2 * x;
            s_x4 = s_x4 + x2 * x2;

            s_y = s_y + y;
            s_xy = s_xy + x * y;
            s_x2y = s_x2y + x2 * y;
        }

        Self {
            x_pow: [s_1, s_x, s_x2, s_x3, s_x4],
            xy_pow: [s_y, s_xy, s_x2y],
        }
    }

    /// Normal-equation matrix in row-major order, unknowns ordered `[c, b, a]`.
    ///
    /// ```text
    /// | Σ1   Σx   Σx² |
    /// | Σx   Σx²  Σx³ |
    /// | Σx²  Σx³  Σx⁴ |
    /// ```
    #[inline]
    pub fn normal_matrix(&self) -> [T; 9] {
        let [s0, s1, s2, s3, s4] = self.x_pow;
        [s0, s1, s2, s1, s2, s3, s2, s3, s4]
    }

    /// Right-hand side of the normal equations: `[Σy, Σxy, Σx²y]`.
    #[inline]
    pub fn rhs(&self) -> [T; 3] {
        self.xy_pow
    }

    /// Number of samples the sums were accumulated over, as a scalar.
    #[inline]
    pub fn count(&self) -> T {
        self.x_pow[0]
    }
}

impl<T: Float> Default for PowerSums<T> {
    fn default() -> Self {
        Self::zero()
    }
}
