use crate::artifacts::lines::LineRecord;
use std::fmt::Display;

/// One line of an edit script, borrowing the line it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp<'a> {
    Keep(&'a LineRecord),
    Insert(&'a LineRecord),
    Delete(&'a LineRecord),
}

impl<'a> DiffOp<'a> {
    pub fn line(&self) -> &'a LineRecord {
        match *self {
            DiffOp::Keep(line) | DiffOp::Insert(line) | DiffOp::Delete(line) => line,
        }
    }

    /// The two-byte operator prefix written before the line.
    pub fn prefix(&self) -> &'static [u8; 2] {
        match self {
            DiffOp::Keep(_) => b"  ",
            DiffOp::Insert(_) => b"+ ",
            DiffOp::Delete(_) => b"- ",
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, DiffOp::Keep(_))
    }
}

impl Display for DiffOp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = String::from_utf8_lossy(self.prefix());
        let line = String::from_utf8_lossy(self.line().as_bytes());
        write!(f, "{prefix}{line}")
    }
}

/// Ordered edit operations, earliest source lines first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript<'a> {
    ops: Vec<DiffOp<'a>>,
}

impl<'a> EditScript<'a> {
    pub fn new(ops: Vec<DiffOp<'a>>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[DiffOp<'a>] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp<'a>> {
        self.ops.iter()
    }

    pub fn keeps(&self) -> usize {
        self.ops.iter().filter(|op| op.is_keep()).count()
    }

    pub fn inserts(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Insert(_)))
            .count()
    }

    pub fn deletes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Delete(_)))
            .count()
    }

    /// True when every operation is a `Keep`.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(DiffOp::is_keep)
    }

    /// The old side the script was computed from: keeps and deletes.
    pub fn old_lines(&self) -> Vec<&'a LineRecord> {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Insert(_)))
            .map(DiffOp::line)
            .collect()
    }

    /// The new side the script produces: keeps and inserts.
    pub fn new_lines(&self) -> Vec<&'a LineRecord> {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Delete(_)))
            .map(DiffOp::line)
            .collect()
    }

    /// Render the script exactly as the emitter would write it.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            out.extend_from_slice(op.prefix());
            out.extend_from_slice(op.line().as_bytes());
        }
        out
    }
}

impl<'a> FromIterator<DiffOp<'a>> for EditScript<'a> {
    fn from_iter<I: IntoIterator<Item = DiffOp<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for EditScript<'a> {
    type Item = DiffOp<'a>;
    type IntoIter = std::vec::IntoIter<DiffOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s EditScript<'a> {
    type Item = &'s DiffOp<'a>;
    type IntoIter = std::slice::Iter<'s, DiffOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
