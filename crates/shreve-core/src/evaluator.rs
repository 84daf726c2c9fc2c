//! Recursive evaluation of F(magnitude, length) over a shared memo table.

use tracing::trace;

use crate::error::Result;
use crate::memo::MemoTable;
use crate::{SOURCE_PROBABILITY, SPLIT_WEIGHT};

/// Counters for memo table traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatorStats {
    /// Cells computed from the base cases or the recurrence (cache misses).
    pub evaluations: u64,
    /// Lookups answered from the memo table.
    pub cache_hits: u64,
}

/// Evaluates the length probability F(magnitude, length).
///
/// Every pair the evaluator computes, including base cases and the pair a
/// caller asked for, is written to the memo table exactly once before it is
/// returned. Recursion depth is bounded by the requested length.
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: MemoTable,
    stats: EvaluatorStats,
}

impl Evaluator {
    /// Create an evaluator for magnitudes `1..=max_magnitude`.
    pub fn new(max_magnitude: usize) -> Result<Self> {
        Ok(Self::with_table(MemoTable::new(max_magnitude)?))
    }

    /// Create an evaluator over an existing (possibly warm) memo table.
    pub fn with_table(table: MemoTable) -> Self {
        Self {
            table,
            stats: EvaluatorStats::default(),
        }
    }

    /// Largest magnitude this evaluator accepts.
    pub fn max_magnitude(&self) -> usize {
        self.table.max_magnitude()
    }

    /// Memo traffic so far.
    pub fn stats(&self) -> EvaluatorStats {
        self.stats
    }

    /// The memo table backing this evaluator.
    pub fn table(&self) -> &MemoTable {
        &self.table
    }

    /// Release the memo table.
    pub fn into_table(self) -> MemoTable {
        self.table
    }

    /// Probability that a random network of `magnitude` has `length`.
    ///
    /// Both arguments must lie in `[1, max_magnitude]`.
    pub fn probability(&mut self, magnitude: usize, length: usize) -> Result<f64> {
        self.table.check_bounds(magnitude, length)?;
        Ok(self.evaluate(magnitude, length))
    }

    /// Raw F(magnitude, l) for `l` in `1..=magnitude`.
    pub fn distribution(&mut self, magnitude: usize) -> Result<Vec<f64>> {
        self.table.check_bounds(magnitude, magnitude)?;
        Ok((1..=magnitude)
            .map(|length| self.evaluate(magnitude, length))
            .collect())
    }

    fn evaluate(&mut self, magnitude: usize, length: usize) -> f64 {
        if let Some(value) = self.table.cell(magnitude, length) {
            self.stats.cache_hits += 1;
            return value;
        }

        let value = if magnitude == 1 {
            SOURCE_PROBABILITY
        } else if length == 1 {
            0.0
        } else {
            // Sub-networks split the magnitude and share length - 1.
            let mut sum = 0.0;
            for i in 1..magnitude {
                let left = self.evaluate(i, length - 1);
                let right = self.evaluate(magnitude - i, length - 1);
                sum += left * right;
            }
            SPLIT_WEIGHT * sum
        };

        self.stats.evaluations += 1;
        self.table.store(magnitude, length, value);
        trace!(magnitude, length, value, "evaluated F");
        value
    }
}
