use crate::artifacts::lines::LineRecord;

/// Common leading and trailing lines of two inputs.
///
/// Only the middle regions between `head` and `tail` need an LCS table; the
/// trimmed lines are emitted as plain keeps around the middle script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trim {
    head: usize,
    tail: usize,
    old_len: usize,
    new_len: usize,
}

impl Trim {
    /// Measure the equal head first, then the equal tail past the head.
    pub fn compute(x: &[LineRecord], y: &[LineRecord]) -> Self {
        let head = x.iter().zip(y).take_while(|(a, b)| a == b).count();
        let tail = x[head..]
            .iter()
            .rev()
            .zip(y[head..].iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        Self {
            head,
            tail,
            old_len: x.len(),
            new_len: y.len(),
        }
    }

    /// A trim that keeps everything in the middle.
    pub fn none(x: &[LineRecord], y: &[LineRecord]) -> Self {
        Self {
            head: 0,
            tail: 0,
            old_len: x.len(),
            new_len: y.len(),
        }
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    pub fn is_identical(&self) -> bool {
        self.old_len == self.new_len && self.head == self.old_len
    }

    /// Lengths of the old and new middle regions.
    pub fn middle_lens(&self) -> (usize, usize) {
        (
            self.old_len - self.head - self.tail,
            self.new_len - self.head - self.tail,
        )
    }

    pub fn head_lines<'a>(&self, x: &'a [LineRecord]) -> &'a [LineRecord] {
        &x[..self.head]
    }

    pub fn old_middle<'a>(&self, x: &'a [LineRecord]) -> &'a [LineRecord] {
        &x[self.head..self.old_len - self.tail]
    }

    pub fn new_middle<'a>(&self, y: &'a [LineRecord]) -> &'a [LineRecord] {
        &y[self.head..self.new_len - self.tail]
    }

    pub fn tail_lines<'a>(&self, x: &'a [LineRecord]) -> &'a [LineRecord] {
        &x[self.old_len - self.tail..]
    }
}
