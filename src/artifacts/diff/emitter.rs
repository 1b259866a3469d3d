use crate::artifacts::core::debug_log;
use crate::artifacts::diff::diff_op::DiffOp;
use crate::artifacts::diff::error::{DiffError, DiffResult};
use crate::artifacts::io::ByteSink;
use colored::Colorize;

/// How operations are rendered into the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rendering {
    /// `<op><space><raw line>`, byte for byte.
    #[default]
    Plain,
    /// Same layout with inserted lines in green and deleted lines in red.
    /// Lines that are not valid UTF-8 fall back to plain output.
    Colored,
}

/// Line counts for one emitted diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub kept: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.inserted > 0 || self.deleted > 0
    }

    fn record(&mut self, op: &DiffOp<'_>) {
        match op {
            DiffOp::Keep(_) => self.kept += 1,
            DiffOp::Insert(_) => self.inserted += 1,
            DiffOp::Delete(_) => self.deleted += 1,
        }
    }
}

/// Writes diff operations to a byte sink as they are produced.
///
/// The first failed write aborts with [`DiffError::IoWrite`]; whatever part
/// of the line already reached the sink stays there.
pub struct Emitter<'s, S: ByteSink + ?Sized> {
    sink: &'s mut S,
    rendering: Rendering,
    summary: DiffSummary,
}

impl<'s, S: ByteSink + ?Sized> Emitter<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self::with_rendering(sink, Rendering::Plain)
    }

    pub fn with_rendering(sink: &'s mut S, rendering: Rendering) -> Self {
        Self {
            sink,
            rendering,
            summary: DiffSummary::default(),
        }
    }

    pub fn emit(&mut self, op: DiffOp<'_>) -> DiffResult<()> {
        let written = match (self.rendering, op) {
            (Rendering::Colored, DiffOp::Insert(_) | DiffOp::Delete(_)) => self.put_colored(&op),
            _ => self.put_plain(&op),
        };
        written.map_err(DiffError::IoWrite)?;

        self.summary.record(&op);
        Ok(())
    }

    pub fn emit_all<'a>(&mut self, ops: impl IntoIterator<Item = DiffOp<'a>>) -> DiffResult<()> {
        ops.into_iter().try_for_each(|op| self.emit(op))
    }

    pub fn summary(&self) -> DiffSummary {
        self.summary
    }

    pub fn finish(self) -> DiffSummary {
        debug_log!("emitted {:?}", self.summary);
        self.summary
    }

    fn put_plain(&mut self, op: &DiffOp<'_>) -> std::io::Result<()> {
        self.sink.put_bytes(op.prefix())?;
        self.sink.put_bytes(op.line().as_bytes())
    }

    fn put_colored(&mut self, op: &DiffOp<'_>) -> std::io::Result<()> {
        let line = op.line();
        let Ok(body) = std::str::from_utf8(line.body()) else {
            return self.put_plain(op);
        };
        let Ok(prefix) = std::str::from_utf8(op.prefix()) else {
            return self.put_plain(op);
        };

        let text = format!("{prefix}{body}");
        let painted = match op {
            DiffOp::Insert(_) => text.green(),
            _ => text.red(),
        };

        self.sink.put_bytes(painted.to_string().as_bytes())?;
        self.sink.put_bytes(line.terminator())
    }
}
