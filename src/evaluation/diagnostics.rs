//! Goodness-of-fit diagnostics.
//!
//! ## Purpose
//!
//! This module measures how well a set of coefficients describes a sample set:
//! residual and total sums of squares, the coefficient of determination, and the
//! residual standard error.
//!
//! ## Design notes
//!
//! * **Two passes**: The mean of `y` is computed first, then residuals.
//! * **Three parameters**: The residual standard error divides by `n − 3`.
//! * **Permissive**: As with the solver, degenerate input is not rejected. With
//!   `n ≤ 3` or constant `y`, the affected fields are non-finite.
//!
//! ## Non-goals
//!
//! * Confidence or prediction intervals.
//! * Information criteria (AIC, BIC).

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::cramer::Coefficients;
use crate::primitives::sample::Sample;

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Number of samples.
    pub n: usize,
    /// Residual sum of squares.
    pub rss: T,
    /// Total sum of squares about the mean of `y`.
    pub tss: T,
    /// Coefficient of determination, `1 − rss / tss`.
    pub r_squared: T,
    /// Residual standard error, `sqrt(rss / (n − 3))`.
    pub rmse: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics for `coeffs` over `samples`.
    pub fn compute(samples: &[Sample<T>], coeffs: &Coefficients<T>) -> Self {
        let n = samples.len();
        let n_t = T::from(n).unwrap_or_else(T::nan);
        let three = T::from(3).unwrap_or_else(T::nan);

        let y_mean = samples.iter().fold(T::zero(), |acc, s| acc + s.y) / n_t;

        let (rss, tss) = samples.iter().fold((T::zero(), T::zero()), |(rss, tss), s| {
            let r = s.y - coeffs.eval(s.x);
            let d = s.y - y_mean;
            (rss + r * r, tss + d * d)
        });

        Self {
            n,
            rss,
            tss,
            r_squared: T::one() - rss / tss,
            rmse: (rss / (n_t - three)).sqrt(),
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Samples: {}", self.n)?;
        writeln!(f, "  RSS:     {:.6}", self.rss)?;
        writeln!(f, "  R^2:     {:.6}", self.r_squared)?;
        write!(f, "  RMSE:    {:.6}", self.rmse)
    }
}
