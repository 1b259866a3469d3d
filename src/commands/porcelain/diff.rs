use crate::areas::comparison::Comparison;
use crate::artifacts::diff::trim::Trim;
use crate::artifacts::diff::{DiffSummary, write_diff};
use crate::artifacts::lines::FileLines;
use anyhow::Context;
use std::io::Write;

impl Comparison {
    /// Read both inputs, diff them and write the result to the writer.
    ///
    /// Both sides are fully read before anything is written.
    pub fn diff(&self) -> anyhow::Result<DiffSummary> {
        let options = self.options();
        let old = self.old_input().read_lines(options.delimiter)?;
        let new = self.new_input().read_lines(options.delimiter)?;

        self.check_line_limit(&old, &new)?;

        let mut writer = self.writer();
        let summary = write_diff(&old, &new, &mut **writer, options).with_context(|| {
            format!("Failed to diff {} and {}", self.old_input(), self.new_input())
        })?;
        writer.flush().context("Failed to flush diff output")?;

        Ok(summary)
    }

    fn check_line_limit(&self, old: &FileLines, new: &FileLines) -> anyhow::Result<()> {
        let Some(max_lines) = self.max_lines() else {
            return Ok(());
        };

        let trim = if self.options().trim {
            Trim::compute(old.as_slice(), new.as_slice())
        } else {
            Trim::none(old.as_slice(), new.as_slice())
        };
        let (old_middle, new_middle) = trim.middle_lens();

        if old_middle > max_lines || new_middle > max_lines {
            anyhow::bail!(
                "refusing to compare {} and {}: {} x {} changed lines exceed the limit of {}",
                self.old_input(),
                self.new_input(),
                old_middle,
                new_middle,
                max_lines
            );
        }

        Ok(())
    }
}
