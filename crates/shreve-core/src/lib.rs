//! Shreve Random Network Lengths
//!
//! Length distribution and expected length of stream networks under Shreve's
//! random topology model.
//!
//! # Model
//!
//! A network of magnitude `m` has `m` source links. Its root splits into two
//! sub-networks whose magnitudes sum to `m` and whose lengths are one less
//! than the parent's. With the two halves independent and the split
//! symmetric, the length probability obeys the bilinear recurrence
//!
//! ```text
//! F(1, l) = 1/2
//! F(m, 1) = 0                                          (m > 1)
//! F(m, l) = 1/2 * sum_{i=1}^{m-1} F(i, l-1) * F(m-i, l-1)
//! ```
//!
//! and the expected length follows from
//!
//! ```text
//! E[m] = m - sum_{i=1}^{m-1} F(m, i) / F(m, m)
//! ```
//!
//! # Memoization
//!
//! Every `(magnitude, length)` pair is evaluated once and stored in a
//! [`MemoTable`], so a full table through magnitude `N` costs `O(N^2)`
//! evaluations of `O(N)` work each.
//!
//! # Example
//!
//! ```
//! use shreve_core::ExpectedLengthTable;
//!
//! let table = ExpectedLengthTable::compute(5).unwrap();
//! assert_eq!(table.len(), 5);
//! assert_eq!(table.get(2).unwrap().expected_length, 2.0);
//! ```

mod aggregator;
mod error;
mod evaluator;
mod memo;

pub use aggregator::{compute_expected_length, ExpectedLength, ExpectedLengthTable};
pub use error::{Error, Result};
pub use evaluator::{Evaluator, EvaluatorStats};
pub use memo::MemoTable;

/// Probability assigned to every length of a magnitude-1 network.
pub const SOURCE_PROBABILITY: f64 = 0.5;

/// Weight applied to the bilinear split sum (left/right symmetry).
pub const SPLIT_WEIGHT: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_magnitudes_match_closed_forms() {
        let table = ExpectedLengthTable::compute(7).unwrap();
        let expected = [
            1.0,
            2.0,
            3.0,
            19.0 / 5.0,
            32.0 / 7.0,
            110.0 / 21.0,
            194.0 / 33.0,
        ];

        for (row, want) in table.iter().zip(expected) {
            assert!(
                (row.expected_length - want).abs() < 1e-12,
                "E[{}] = {}, expected {}",
                row.magnitude,
                row.expected_length,
                want
            );
        }
    }
}
