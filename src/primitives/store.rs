//! Growable sample storage.
//!
//! ## Purpose
//!
//! This module provides `SampleStore`, the ordered, append-only collection of
//! `(x, y)` samples a quadratic fit is computed over.
//!
//! ## Design notes
//!
//! * **Capacity hints**: `with_capacity` reserves storage up front; it never
//!   pre-populates, so the store starts empty either way.
//! * **Recycling**: `clear` drops the samples but keeps the allocation, so a store
//!   can be refilled without reallocating.
//! * **Checked access**: Positional access returns `Result` instead of panicking.
//!
//! ## Invariants
//!
//! * Insertion order is preserved; positions are stable until `clear`.
//! * `len()` equals the number of `add` calls since construction or the last `clear`.
//! * No deduplication and no ordering by value.
//!
//! ## Non-goals
//!
//! * Removing individual samples.
//! * Rejecting non-finite values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// SampleStore
// ============================================================================

/// Ordered collection of `(x, y)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStore<T>(Vec<Sample<T>>);

impl<T: Float> SampleStore<T> {
    /// Create an empty store.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty store with storage reserved for `n` samples.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Append a sample to the end of the store.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.0.push(Sample::new(x, y));
    }

    /// Get the sample at `index`.
    ///
    /// Returns [`FitError::OutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&Sample<T>, FitError> {
        let len = self.0.len();
        self.0.get(index).ok_or(FitError::OutOfRange { index, len })
    }

    /// Get a mutable reference to the sample at `index`.
    ///
    /// Returns [`FitError::OutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Sample<T>, FitError> {
        let len = self.0.len();
        self.0.get_mut(index).ok_or(FitError::OutOfRange { index, len })
    }

    /// Remove all samples (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        log::trace!("clearing {} samples", self.0.len());
        self.0.clear();
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of samples the store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Reserve room for at least `additional` more samples.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// View the samples in insertion order.
    #[inline]
    pub fn samples(&self) -> &[Sample<T>] {
        &self.0
    }

    /// Iterate over the samples in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Sample<T>> {
        self.0.iter()
    }
}

impl<T: Float> Default for SampleStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Collection Traits
// ============================================================================

impl<T: Float> Extend<Sample<T>> for SampleStore<T> {
    fn extend<I: IntoIterator<Item = Sample<T>>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Float> Extend<(T, T)> for SampleStore<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Sample::from));
    }
}

impl<T: Float> FromIterator<(T, T)> for SampleStore<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(Sample::from).collect())
    }
}

impl<T: Float> FromIterator<Sample<T>> for SampleStore<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T: Float> IntoIterator for &'a SampleStore<T> {
    type Item = &'a Sample<T>;
    type IntoIter = slice::Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> From<Vec<Sample<T>>> for SampleStore<T> {
    fn from(v: Vec<Sample<T>>) -> Self {
        Self(v)
    }
}
