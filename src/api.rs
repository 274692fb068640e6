//! High-level API for quadratic least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point, [`QuadraticFit`].
//! It owns a [`SampleStore`] and computes the least-squares coefficients of
//! `y = a·x² + b·x + c` over whatever samples the store holds at call time.
//!
//! ## Design notes
//!
//! * **Stateless solver**: Nothing is cached between calls; every `compute`
//!   re-aggregates the current samples.
//! * **Read-only fitting**: `compute`, `coefficients` and `diagnostics` borrow the
//!   fit immutably, so concurrent reads of an unchanging fit are allowed and a
//!   mutation during a fit is rejected at compile time.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! 1. Create a [`QuadraticFit`] via `QuadraticFit::new()` or `with_capacity(n)`.
//! 2. Feed samples with `.add(x, y)`.
//! 3. Call `.compute()` for `[a, b, c]`.
//!
//! At least three samples with at least three distinct `x` values are required
//! for a meaningful result. This is not checked. With fewer, the coefficients are
//! infinite or NaN if the power sums happen to be exact, and finite but
//! meaningless otherwise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::cramer;

// Publicly re-exported types
pub use crate::algorithms::cramer::{Coefficients, determinant, fit, solve};
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::math::power_sums::PowerSums;
pub use crate::primitives::errors::FitError;
pub use crate::primitives::sample::Sample;
pub use crate::primitives::store::SampleStore;

// ============================================================================
// QuadraticFit
// ============================================================================

/// Least-squares quadratic fit over an incrementally built sample set.
///
/// ```
/// use quadfit::prelude::*;
///
/// let mut fit = QuadraticFit::<f64>::with_capacity(3);
/// fit.add(-1.0, 2.0);
/// fit.add(0.0, 1.0);
/// fit.add(1.0, 2.0);
///
/// let [a, b, c] = fit.compute();
/// assert!((a - 1.0).abs() < 1e-12);
/// assert!(b.abs() < 1e-12);
/// assert!((c - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticFit<T> {
    samples: SampleStore<T>,
}

impl<T: Float> QuadraticFit<T> {
    /// Create an empty fit.
    pub fn new() -> Self {
        Self {
            samples: SampleStore::new(),
        }
    }

    /// Create an empty fit with storage reserved for `n` samples.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            samples: SampleStore::with_capacity(n),
        }
    }

    // ========================================================================
    // Sample Management
    // ========================================================================

    /// Add a sample.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.samples.add(x, y);
    }

    /// Get the sample at `index`, or [`FitError::OutOfRange`].
    ///
    /// ```
    /// use quadfit::prelude::*;
    ///
    /// let mut fit = QuadraticFit::new();
    /// fit.add(1.0, 2.0);
    ///
    /// assert_eq!(fit.at(0)?, &Sample::new(1.0, 2.0));
    /// assert_eq!(fit.at(1), Err(FitError::OutOfRange { index: 1, len: 1 }));
    /// # Result::<(), FitError>::Ok(())
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&Sample<T>, FitError> {
        self.samples.at(index)
    }

    /// Get a mutable reference to the sample at `index`, or [`FitError::OutOfRange`].
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Sample<T>, FitError> {
        self.samples.at_mut(index)
    }

    /// Remove all samples.
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Reserve room for at least `additional` more samples.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    /// Underlying sample store.
    #[inline]
    pub fn store(&self) -> &SampleStore<T> {
        &self.samples
    }

    /// Iterate over the samples in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Compute `[a, b, c]`.
    #[inline]
    pub fn compute(&self) -> [T; 3] {
        self.coefficients().to_array()
    }

    /// Compute the coefficients as a [`Coefficients`] value.
    #[inline]
    pub fn coefficients(&self) -> Coefficients<T> {
        cramer::solve(&self.power_sums())
    }

    /// Power sums of the current samples.
    #[inline]
    pub fn power_sums(&self) -> PowerSums<T> {
        PowerSums::accumulate(self.samples.samples())
    }

    /// Fit the current samples and report residual diagnostics.
    pub fn diagnostics(&self) -> FitDiagnostics<T> {
        FitDiagnostics::compute(self.samples.samples(), &self.coefficients())
    }
}

impl<T: Float> Default for QuadraticFit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> From<SampleStore<T>> for QuadraticFit<T> {
    fn from(samples: SampleStore<T>) -> Self {
        Self { samples }
    }
}

impl<T: Float> From<Vec<Sample<T>>> for QuadraticFit<T> {
    fn from(samples: Vec<Sample<T>>) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}

impl<T: Float> Extend<(T, T)> for QuadraticFit<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

impl<T: Float> FromIterator<(T, T)> for QuadraticFit<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Float> IntoIterator for &'a QuadraticFit<T> {
    type Item = &'a Sample<T>;
    type IntoIter = slice::Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
