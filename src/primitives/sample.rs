//! A single `(x, y)` observation.

// External dependencies
use num_traits::Float;

/// An `(x, y)` sample point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    /// Abscissa.
    pub x: T,
    /// Ordinate.
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Create a new sample.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Sample<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Sample<T>> for (T, T) {
    #[inline]
    fn from(sample: Sample<T>) -> Self {
        (sample.x, sample.y)
    }
}
