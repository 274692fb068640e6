//! Error types for quadratic fitting.
//!
//! ## Purpose
//!
//! This module defines the error taxonomy surfaced by the crate. Only positional
//! access into a sample store can fail; the solver itself never returns an error.
//!
//! ## Design notes
//!
//! * **Minimal**: A numerically degenerate fit is not an error kind. It shows up as
//!   non-finite coefficients under ordinary floating-point division.
//! * **no_std**: Derives `thiserror::Error` without requiring the standard library.
//!
//! ## Non-goals
//!
//! * This module does not validate sample values (NaN and infinities are accepted).

// External dependencies
use thiserror::Error;

/// Errors returned by quadratic fitting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FitError {
    /// A sample was requested at a position outside `[0, len)`.
    #[error("sample index {index} out of range for store of length {len}")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Number of samples in the store at the time of the request.
        len: usize,
    },
}
