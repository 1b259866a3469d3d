//! Line records and the reader that produces them
//!
//! - `line_record`: one line of raw bytes, terminator included
//! - `file_lines`: the ordered, owned lines of one input
//! - `line_reader`: splits a byte source into line records

pub mod file_lines;
pub mod line_reader;
pub mod line_record;

pub use file_lines::FileLines;
pub use line_reader::LineReader;
pub use line_record::LineRecord;
