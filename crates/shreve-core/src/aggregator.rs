//! Expected network length per magnitude.
//!
//! For magnitude `m` the expected length is
//! `m - sum_{i<m} F(m, i) / F(m, m)`, with F(m, m) as the normalizer.
//! Magnitudes are driven in increasing order over one evaluator so each
//! magnitude reuses the cells filled by the ones before it.

use tracing::debug;

use crate::error::{Error, Result};
use crate::evaluator::Evaluator;

/// Expected length for a single magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedLength {
    /// Number of source links.
    pub magnitude: usize,
    /// Expected length of a random network with that magnitude.
    pub expected_length: f64,
}

/// Compute the expected length of networks with `magnitude` source links.
///
/// Fails with [`Error::DegenerateNormalizer`] if F(m, m) is not strictly
/// positive and finite.
pub fn compute_expected_length(evaluator: &mut Evaluator, magnitude: usize) -> Result<f64> {
    let normalizer = evaluator.probability(magnitude, magnitude)?;
    if !(normalizer.is_finite() && normalizer > 0.0) {
        return Err(Error::DegenerateNormalizer {
            magnitude,
            value: normalizer,
        });
    }

    let mut sum = 0.0;
    for length in 1..magnitude {
        sum += evaluator.probability(magnitude, length)? / normalizer;
    }
    Ok(magnitude as f64 - sum)
}

/// Expected lengths for magnitudes `1..=N`, in increasing magnitude order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedLengthTable {
    rows: Vec<ExpectedLength>,
}

impl ExpectedLengthTable {
    /// Compute the table for magnitudes `1..=max_magnitude` on a fresh evaluator.
    pub fn compute(max_magnitude: usize) -> Result<Self> {
        let mut evaluator = Evaluator::new(max_magnitude)?;
        Self::compute_with(&mut evaluator)
    }

    /// Compute the table for every magnitude the evaluator supports.
    ///
    /// The evaluator keeps its memo table afterwards, so callers can read
    /// the underlying distributions without recomputation.
    pub fn compute_with(evaluator: &mut Evaluator) -> Result<Self> {
        let max_magnitude = evaluator.max_magnitude();
        let mut rows = Vec::with_capacity(max_magnitude);

        for magnitude in 1..=max_magnitude {
            let expected_length = compute_expected_length(evaluator, magnitude)?;
            debug!(magnitude, expected_length, "expected length");
            rows.push(ExpectedLength {
                magnitude,
                expected_length,
            });
        }

        let stats = evaluator.stats();
        debug!(
            max_magnitude,
            evaluations = stats.evaluations,
            cache_hits = stats.cache_hits,
            "expected length table complete"
        );
        Ok(Self { rows })
    }

    /// All rows, ordered by magnitude.
    pub fn rows(&self) -> &[ExpectedLength] {
        &self.rows
    }

    /// Number of magnitudes in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `magnitude`, if tabulated.
    pub fn get(&self, magnitude: usize) -> Option<&ExpectedLength> {
        magnitude
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
    }

    /// Iterate rows in increasing magnitude order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExpectedLength> {
        self.rows.iter()
    }
}

impl IntoIterator for ExpectedLengthTable {
    type Item = ExpectedLength;
    type IntoIter = std::vec::IntoIter<ExpectedLength>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpectedLengthTable {
    type Item = &'a ExpectedLength;
    type IntoIter = std::slice::Iter<'a, ExpectedLength>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
