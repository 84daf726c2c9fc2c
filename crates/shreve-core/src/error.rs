//! Error types for the length engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the memo table, evaluator and aggregator.
///
/// All of these are local invariant violations. None of them is recoverable
/// within a single computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Requested magnitude lies outside `[1, max]`.
    #[error("magnitude {magnitude} out of range [1, {max}]")]
    MagnitudeOutOfRange { magnitude: usize, max: usize },

    /// Requested length lies outside `[1, max]`.
    #[error("length {length} out of range [1, {max}]")]
    LengthOutOfRange { length: usize, max: usize },

    /// A value that is not a probability was offered to the memo table.
    #[error("F({magnitude}, {length}) = {value} is not a probability")]
    InvalidProbability {
        magnitude: usize,
        length: usize,
        value: f64,
    },

    /// F(m, m) is zero or non-finite, so the expectation is undefined.
    #[error("degenerate normalizer F({magnitude}, {magnitude}) = {value}")]
    DegenerateNormalizer { magnitude: usize, value: f64 },

    /// A table must hold at least magnitude 1.
    #[error("maximum magnitude must be at least 1")]
    EmptyTable,

    /// An `N x N` table for this magnitude cannot be allocated.
    #[error("memo table for maximum magnitude {max_magnitude} is too large")]
    CapacityOverflow { max_magnitude: usize },
}
