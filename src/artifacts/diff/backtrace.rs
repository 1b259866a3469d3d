//! Edit script reconstruction from a filled LCS table.
//!
//! The walk starts at `(m, n)` and applies, in order:
//!
//! 1. lines equal: step to `(i - 1, j - 1)`, `Keep`
//! 2. `j > 0` and (`i == 0` or `C(i, j - 1) >= C(i - 1, j)`): step to `(i, j - 1)`, `Insert`
//! 3. `i > 0` and (`j == 0` or `C(i, j - 1) < C(i - 1, j)`): step to `(i - 1, j)`, `Delete`
//! 4. `(0, 0)`: stop
//!
//! Each step is pushed onto an explicit stack while walking toward the
//! origin. Popping the stack replays the steps origin-first, which is the
//! left-to-right textual order of the script. On ties rule 2 is chosen while
//! walking, so an unmatched region unwinds as all of its deletes followed by
//! all of its inserts.

use crate::artifacts::core::debug_log;
use crate::artifacts::diff::diff_op::DiffOp;
use crate::artifacts::diff::error::{DiffError, DiffResult};
use crate::artifacts::diff::lcs_table::LcsTable;
use crate::artifacts::lines::LineRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Keep,
    Insert,
    Delete,
}

/// Iterator over the edit script of two line slices, in textual order.
///
/// The table is only read while constructing the iterator and can be dropped
/// afterwards; iteration borrows the lines alone.
#[derive(Debug, Clone)]
pub struct Backtrace<'a> {
    x: &'a [LineRecord],
    y: &'a [LineRecord],
    steps: Vec<Step>,
    i: usize,
    j: usize,
}

impl<'a> Backtrace<'a> {
    pub fn new(table: &LcsTable, x: &'a [LineRecord], y: &'a [LineRecord]) -> DiffResult<Self> {
        let (m, n) = (x.len(), y.len());
        assert!(
            table.rows() == m + 1 && table.cols() == n + 1,
            "lcs table is {}x{} but the lines need {}x{}",
            table.rows(),
            table.cols(),
            m + 1,
            n + 1
        );

        let mut steps = Vec::new();
        steps
            .try_reserve_exact(m + n)
            .map_err(|_| DiffError::AllocationFailure {
                what: "backtrace stack",
            })?;

        let (mut i, mut j) = (m, n);
        loop {
            if i > 0 && j > 0 && x[i - 1] == y[j - 1] {
                steps.push(Step::Keep);
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                steps.push(Step::Insert);
                j -= 1;
            } else if i > 0 && (j == 0 || table.get(i, j - 1) < table.get(i - 1, j)) {
                steps.push(Step::Delete);
                i -= 1;
            } else {
                break;
            }
        }

        debug_log!("backtrace collected {} steps over {}x{}", steps.len(), m, n);

        Ok(Self {
            x,
            y,
            steps,
            i: 0,
            j: 0,
        })
    }
}

impl<'a> Iterator for Backtrace<'a> {
    type Item = DiffOp<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let op = match self.steps.pop()? {
            Step::Keep => {
                let line = &self.x[self.i];
                self.i += 1;
                self.j += 1;
                DiffOp::Keep(line)
            }
            Step::Insert => {
                let line = &self.y[self.j];
                self.j += 1;
                DiffOp::Insert(line)
            }
            Step::Delete => {
                let line = &self.x[self.i];
                self.i += 1;
                DiffOp::Delete(line)
            }
        };
        Some(op)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.steps.len(), Some(self.steps.len()))
    }
}

impl ExactSizeIterator for Backtrace<'_> {}
