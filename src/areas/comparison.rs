use crate::areas::input::Input;
use crate::artifacts::diff::DiffOptions;
use std::cell::{RefCell, RefMut};

/// Two inputs, the options to diff them with and the writer to report to.
pub struct Comparison {
    old: Input,
    new: Input,
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DiffOptions,
    max_lines: Option<usize>,
}

impl Comparison {
    pub fn new(old: &str, new: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let (old, new) = (Input::parse(old), Input::parse(new));

        if old.is_stdin() && new.is_stdin() {
            anyhow::bail!("standard input can only be one side of the comparison");
        }

        Ok(Comparison {
            old,
            new,
            writer: RefCell::new(writer),
            options: DiffOptions::default(),
            max_lines: None,
        })
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Refuse to build a table when either middle region exceeds `max_lines`.
    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn old_input(&self) -> &Input {
        &self.old
    }

    pub fn new_input(&self) -> &Input {
        &self.new
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
