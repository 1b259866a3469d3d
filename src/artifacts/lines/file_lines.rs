use crate::artifacts::diff::error::DiffResult;
use crate::artifacts::lines::{LineReader, LineRecord};
use std::io::Read;

/// The ordered lines of one input; index order is read order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLines {
    lines: Vec<LineRecord>,
}

impl FileLines {
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self { lines }
    }

    /// Read newline-delimited lines from any reader.
    pub fn from_reader(reader: impl Read) -> DiffResult<Self> {
        LineReader::new().read_lines(&mut reader.bytes())
    }

    pub fn from_bytes(mut bytes: &[u8]) -> DiffResult<Self> {
        LineReader::new().read_lines(&mut bytes)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineRecord> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Sum of the byte lengths of every line.
    pub fn total_bytes(&self) -> usize {
        self.lines.iter().map(LineRecord::len).sum()
    }
}

impl<'a> IntoIterator for &'a FileLines {
    type Item = &'a LineRecord;
    type IntoIter = std::slice::Iter<'a, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl FromIterator<LineRecord> for FileLines {
    fn from_iter<I: IntoIterator<Item = LineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[LineRecord]> for FileLines {
    fn as_ref(&self) -> &[LineRecord] {
        self.as_slice()
    }
}
