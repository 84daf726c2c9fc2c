//! Memo table for F(magnitude, length).
//!
//! A dense `N x N` grid of optional probabilities. Magnitudes and lengths are
//! both 1-based and range over `[1, N]`; lengths above the magnitude are
//! valid cells because the recurrence reaches them (`F(1, l)` for any `l`).
//!
//! Cells are written once. An unset cell is `None`, never a NaN sentinel.

use crate::error::{Error, Result};

/// Write-once store of computed length probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoTable {
    max_magnitude: usize,
    cells: Vec<Option<f64>>,
}

impl MemoTable {
    /// Create a table for magnitudes and lengths `1..=max_magnitude`, all unset.
    pub fn new(max_magnitude: usize) -> Result<Self> {
        if max_magnitude == 0 {
            return Err(Error::EmptyTable);
        }
        let len = max_magnitude
            .checked_mul(max_magnitude)
            .ok_or(Error::CapacityOverflow { max_magnitude })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::CapacityOverflow { max_magnitude })?;
        cells.resize(len, None);

        Ok(Self {
            max_magnitude,
            cells,
        })
    }

    /// Largest magnitude (and length) this table can hold.
    #[inline]
    pub const fn max_magnitude(&self) -> usize {
        self.max_magnitude
    }

    /// Stored value for `(magnitude, length)`, or `None` if not yet computed.
    pub fn get(&self, magnitude: usize, length: usize) -> Result<Option<f64>> {
        self.check_bounds(magnitude, length)?;
        Ok(self.cell(magnitude, length))
    }

    /// Whether `(magnitude, length)` has been computed.
    pub fn is_set(&self, magnitude: usize, length: usize) -> Result<bool> {
        self.get(magnitude, length).map(|v| v.is_some())
    }

    /// Store a probability for `(magnitude, length)`.
    ///
    /// Rejects values outside `[0, 1]`. Overwriting a cell with a different
    /// value is a logic error and trips a debug assertion.
    pub fn set(&mut self, magnitude: usize, length: usize, value: f64) -> Result<()> {
        self.check_bounds(magnitude, length)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidProbability {
                magnitude,
                length,
                value,
            });
        }
        self.store(magnitude, length, value);
        Ok(())
    }

    /// Row of stored values for one magnitude, indexed by `length - 1`.
    pub fn row(&self, magnitude: usize) -> Result<&[Option<f64>]> {
        self.check_bounds(magnitude, 1)?;
        let start = (magnitude - 1) * self.max_magnitude;
        Ok(&self.cells[start..start + self.max_magnitude])
    }

    /// Number of computed cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Reject coordinates outside `[1, N] x [1, N]`.
    pub fn check_bounds(&self, magnitude: usize, length: usize) -> Result<()> {
        if magnitude == 0 || magnitude > self.max_magnitude {
            return Err(Error::MagnitudeOutOfRange {
                magnitude,
                max: self.max_magnitude,
            });
        }
        if length == 0 || length > self.max_magnitude {
            return Err(Error::LengthOutOfRange {
                length,
                max: self.max_magnitude,
            });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, magnitude: usize, length: usize) -> usize {
        (magnitude - 1) * self.max_magnitude + (length - 1)
    }

    /// Unchecked read. Callers guarantee in-range coordinates.
    #[inline]
    pub(crate) fn cell(&self, magnitude: usize, length: usize) -> Option<f64> {
        self.cells[self.index(magnitude, length)]
    }

    /// Unchecked write. Callers guarantee in-range coordinates.
    #[inline]
    pub(crate) fn store(&mut self, magnitude: usize, length: usize, value: f64) {
        debug_assert!((0.0..=1.0).contains(&value), "F({magnitude}, {length}) = {value}");
        let idx = self.index(magnitude, length);
        debug_assert!(
            self.cells[idx].map_or(true, |old| old.to_bits() == value.to_bits()),
            "F({magnitude}, {length}) rewritten with a different value"
        );
        self.cells[idx] = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let table = MemoTable::new(4).unwrap();
        for m in 1..=4 {
            for l in 1..=4 {
                assert_eq!(table.get(m, l).unwrap(), None);
            }
        }
        assert_eq!(table.filled(), 0);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(MemoTable::new(0), Err(Error::EmptyTable));
    }

    #[test]
    fn oversized_table_is_an_error() {
        assert_eq!(
            MemoTable::new(usize::MAX),
            Err(Error::CapacityOverflow {
                max_magnitude: usize::MAX
            })
        );

        // N^2 fits in usize on 64-bit targets but not in memory.
        let huge = 1usize << (usize::BITS / 2 - 1);
        assert_eq!(
            MemoTable::new(huge),
            Err(Error::CapacityOverflow {
                max_magnitude: huge
            })
        );
    }

    #[test]
    fn set_then_get() {
        let mut table = MemoTable::new(3).unwrap();
        table.set(2, 3, 0.125).unwrap();

        assert_eq!(table.get(2, 3).unwrap(), Some(0.125));
        assert!(table.is_set(2, 3).unwrap());
        assert!(!table.is_set(3, 2).unwrap());
        assert_eq!(table.filled(), 1);
    }

    #[test]
    fn bounds_are_enforced() {
        let mut table = MemoTable::new(3).unwrap();

        assert_eq!(
            table.get(0, 1),
            Err(Error::MagnitudeOutOfRange { magnitude: 0, max: 3 })
        );
        assert_eq!(
            table.get(4, 1),
            Err(Error::MagnitudeOutOfRange { magnitude: 4, max: 3 })
        );
        assert_eq!(
            table.get(1, 0),
            Err(Error::LengthOutOfRange { length: 0, max: 3 })
        );
        assert_eq!(
            table.set(1, 4, 0.5),
            Err(Error::LengthOutOfRange { length: 4, max: 3 })
        );
    }

    #[test]
    fn non_probabilities_rejected() {
        let mut table = MemoTable::new(2).unwrap();

        for value in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                table.set(1, 1, value),
                Err(Error::InvalidProbability { magnitude: 1, length: 1, .. })
            ));
        }
        assert_eq!(table.get(1, 1).unwrap(), None);
    }

    #[test]
    fn rewriting_same_value_is_allowed() {
        let mut table = MemoTable::new(2).unwrap();
        table.set(2, 2, 0.125).unwrap();
        table.set(2, 2, 0.125).unwrap();
        assert_eq!(table.get(2, 2).unwrap(), Some(0.125));
    }

    #[test]
    fn row_covers_all_lengths() {
        let mut table = MemoTable::new(3).unwrap();
        table.set(2, 1, 0.0).unwrap();
        table.set(2, 2, 0.125).unwrap();

        assert_eq!(table.row(2).unwrap(), &[Some(0.0), Some(0.125), None]);
        assert!(table.row(4).is_err());
    }
}
