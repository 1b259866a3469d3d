//! Longest common subsequence line diff
//!
//! This module implements the diff engine:
//!
//! - `trim`: common head/tail detection that shrinks the compared region
//! - `lcs_table`: the dynamic-programming table of subsequence lengths
//! - `backtrace`: stack-driven walk of the table into an edit script
//! - `emitter`: rendering of edit operations into a byte sink
//! - `engine`: entry points combining the above
//!
//! Only the middle regions left after trimming pay the quadratic table cost;
//! identical inputs and inputs with an empty middle never build a table.

pub mod backtrace;
pub mod diff_op;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod lcs_table;
pub mod trim;

pub use diff_op::{DiffOp, EditScript};
pub use emitter::{DiffSummary, Emitter, Rendering};
pub use engine::{DiffOptions, diff, diff_streams, edit_ops, write_diff};
pub use error::{DiffError, DiffResult};
