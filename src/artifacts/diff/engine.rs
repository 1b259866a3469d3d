//! Entry points tying trimming, table construction and backtrace together.

use crate::artifacts::core::debug_log;
use crate::artifacts::diff::backtrace::Backtrace;
use crate::artifacts::diff::diff_op::{DiffOp, EditScript};
use crate::artifacts::diff::emitter::{DiffSummary, Emitter, Rendering};
use crate::artifacts::diff::error::DiffResult;
use crate::artifacts::diff::lcs_table::LcsTable;
use crate::artifacts::diff::trim::Trim;
use crate::artifacts::io::{ByteSink, ByteSource};
use crate::artifacts::lines::{FileLines, LineReader, LineRecord};

/// Knobs for one diff invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Strip common head/tail lines before building the table.
    pub trim: bool,
    pub rendering: Rendering,
    /// Line delimiter used when reading byte streams.
    pub delimiter: u8,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            trim: true,
            rendering: Rendering::Plain,
            delimiter: b'\n',
        }
    }
}

impl DiffOptions {
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_rendering(mut self, rendering: Rendering) -> Self {
        self.rendering = rendering;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Middle part of the script: whatever lies between the trimmed head and tail.
enum Middle<'a> {
    Inserts(std::slice::Iter<'a, LineRecord>),
    Deletes(std::slice::Iter<'a, LineRecord>),
    Backtrace(Backtrace<'a>),
}

impl<'a> Iterator for Middle<'a> {
    type Item = DiffOp<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Middle::Inserts(lines) => lines.next().map(DiffOp::Insert),
            Middle::Deletes(lines) => lines.next().map(DiffOp::Delete),
            Middle::Backtrace(backtrace) => backtrace.next(),
        }
    }
}

impl<'a> Middle<'a> {
    /// Never builds a table with an empty dimension.
    fn compute(x: &'a [LineRecord], y: &'a [LineRecord]) -> DiffResult<Self> {
        if x.is_empty() {
            return Ok(Middle::Inserts(y.iter()));
        }
        if y.is_empty() {
            return Ok(Middle::Deletes(x.iter()));
        }

        let table = LcsTable::build(x, y)?;
        Ok(Middle::Backtrace(Backtrace::new(&table, x, y)?))
    }
}

/// Lazily produce the full edit script for `x` against `y`.
///
/// The LCS table, when one is needed, is dropped before this returns; the
/// iterator only borrows the lines.
pub fn edit_ops<'a>(
    x: &'a [LineRecord],
    y: &'a [LineRecord],
    options: DiffOptions,
) -> DiffResult<impl Iterator<Item = DiffOp<'a>> + 'a> {
    let trim = if options.trim {
        Trim::compute(x, y)
    } else {
        Trim::none(x, y)
    };

    debug_log!(
        "trimmed head={} tail={}, middle {:?}, identical={}",
        trim.head(),
        trim.tail(),
        trim.middle_lens(),
        trim.is_identical()
    );

    let middle = Middle::compute(trim.old_middle(x), trim.new_middle(y))?;

    Ok(trim
        .head_lines(x)
        .iter()
        .map(DiffOp::Keep)
        .chain(middle)
        .chain(trim.tail_lines(x).iter().map(DiffOp::Keep)))
}

/// Collect the edit script of two inputs.
pub fn diff<'a>(
    old: &'a FileLines,
    new: &'a FileLines,
    options: DiffOptions,
) -> DiffResult<EditScript<'a>> {
    Ok(edit_ops(old.as_slice(), new.as_slice(), options)?.collect())
}

/// Stream the edit script of two inputs into `sink`.
///
/// Fails before writing anything if the table cannot be built; fails midway
/// with `IoWrite` if the sink rejects a write.
pub fn write_diff<S: ByteSink + ?Sized>(
    old: &FileLines,
    new: &FileLines,
    sink: &mut S,
    options: DiffOptions,
) -> DiffResult<DiffSummary> {
    let ops = edit_ops(old.as_slice(), new.as_slice(), options)?;

    let mut emitter = Emitter::with_rendering(sink, options.rendering);
    emitter.emit_all(ops)?;
    Ok(emitter.finish())
}

/// Read both sources to completion, then diff them into `sink`.
pub fn diff_streams<A, B, S>(
    old: &mut A,
    new: &mut B,
    sink: &mut S,
    options: DiffOptions,
) -> DiffResult<DiffSummary>
where
    A: ByteSource + ?Sized,
    B: ByteSource + ?Sized,
    S: ByteSink + ?Sized,
{
    let mut reader = LineReader::with_delimiter(options.delimiter);
    let old = reader.read_lines(old)?;
    let new = reader.read_lines(new)?;

    write_diff(&old, &new, sink, options)
}
