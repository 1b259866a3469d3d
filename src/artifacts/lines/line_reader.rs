use crate::artifacts::diff::error::{DiffError, DiffResult};
use crate::artifacts::io::ByteSource;
use crate::artifacts::lines::{FileLines, LineRecord};
use bytes::Bytes;

const INITIAL_CAPACITY: usize = 128;
const DEFAULT_DELIMITER: u8 = b'\n';

/// Splits a byte source into line records on a single delimiter byte.
///
/// The reader keeps one scratch buffer that grows geometrically from
/// [`INITIAL_CAPACITY`] bytes, doubling whenever a line does not fit. Each
/// finished line is copied out at its exact length so long-lived records do
/// not pin the scratch capacity.
#[derive(Debug, Clone)]
pub struct LineReader {
    delimiter: u8,
    buffer: Vec<u8>,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            buffer: Vec::new(),
        }
    }

    /// Read the whole source. Zero bytes of input give an empty `FileLines`.
    pub fn read_lines<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> DiffResult<FileLines> {
        let mut lines = Vec::new();

        while let Some(line) = self.read_line(source)? {
            lines
                .try_reserve(1)
                .map_err(|_| DiffError::AllocationFailure { what: "line index" })?;
            lines.push(line);
        }

        Ok(FileLines::new(lines))
    }

    /// Read one line, delimiter included.
    ///
    /// Returns `None` once the source is exhausted. A trailing run of bytes
    /// without a delimiter becomes a final unterminated record.
    pub fn read_line<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> DiffResult<Option<LineRecord>> {
        self.buffer.clear();
        if self.buffer.capacity() < INITIAL_CAPACITY {
            self.buffer
                .try_reserve_exact(INITIAL_CAPACITY)
                .map_err(|_| DiffError::AllocationFailure { what: "line buffer" })?;
        }

        while let Some(byte) = source.next_byte().map_err(DiffError::IoRead)? {
            if self.buffer.len() == self.buffer.capacity() {
                self.grow()?;
            }
            self.buffer.push(byte);

            if byte == self.delimiter {
                return Ok(Some(self.take_line(true)));
            }
        }

        if self.buffer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.take_line(false)))
        }
    }

    fn grow(&mut self) -> DiffResult<()> {
        let capacity = self.buffer.capacity();
        let doubled = capacity
            .checked_mul(2)
            .ok_or(DiffError::BufferOverflow { capacity })?;

        self.buffer
            .try_reserve_exact(doubled - self.buffer.len())
            .map_err(|_| DiffError::AllocationFailure { what: "line buffer" })
    }

    fn take_line(&self, terminated: bool) -> LineRecord {
        LineRecord::new(Bytes::copy_from_slice(&self.buffer), terminated)
    }
}
