use crate::artifacts::lines::{FileLines, LineReader};
use anyhow::Context;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const STDIN_MARKER: &str = "-";

/// One side of a comparison: a file on disk or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(Box<Path>),
}

impl Input {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            Input::Stdin
        } else {
            Input::File(Path::new(arg).into())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin)
    }

    /// Read every line, delimiter included.
    pub fn read_lines(&self, delimiter: u8) -> anyhow::Result<FileLines> {
        let mut reader = LineReader::with_delimiter(delimiter);

        match self {
            Input::Stdin => {
                let stdin = io::stdin().lock();
                reader
                    .read_lines(&mut stdin.bytes())
                    .context("Failed to read standard input")
            }
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                reader
                    .read_lines(&mut BufReader::new(file).bytes())
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "{STDIN_MARKER}"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}
