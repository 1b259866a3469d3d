use crate::artifacts::core::debug_log;
use crate::artifacts::diff::error::{DiffError, DiffResult};
use crate::artifacts::lines::LineRecord;

/// Dynamic-programming table of common subsequence lengths.
///
/// `get(i, j)` is the length of the longest common subsequence of the first
/// `i` lines of the old side and the first `j` lines of the new side. Cells
/// live in one row-major buffer of `(m + 1) * (n + 1)` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Allocate a zeroed table addressing `0..=m` by `0..=n`.
    pub fn zeroed(m: usize, n: usize) -> DiffResult<Self> {
        let overflow = || DiffError::AllocationFailure { what: "lcs table" };
        let rows = m.checked_add(1).ok_or_else(overflow)?;
        let cols = n.checked_add(1).ok_or_else(overflow)?;
        let size = rows.checked_mul(cols).ok_or_else(overflow)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| overflow())?;
        cells.resize(size, 0);

        Ok(Self { rows, cols, cells })
    }

    /// Fill the table for `x` against `y`.
    ///
    /// Every cell is written before any backtrace reads it; row `i` depends
    /// only on row `i - 1` and on the cell to its left.
    pub fn build(x: &[LineRecord], y: &[LineRecord]) -> DiffResult<Self> {
        let (m, n) = (x.len(), y.len());
        let mut table = Self::zeroed(m, n)?;

        for i in 1..=m {
            for j in 1..=n {
                let count = if x[i - 1] == y[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i, j - 1).max(table.get(i - 1, j))
                };
                table.set(i, j, count);
            }
        }

        debug_log!("built lcs table {}x{}, lcs length {}", m + 1, n + 1, table.lcs_len());
        Ok(table)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[self.offset(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        let offset = self.offset(i, j);
        self.cells[offset] = value;
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "lcs table index ({i}, {j}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}
