//! Diff data structures and algorithms
//!
//! This module contains the building blocks of the line diff:
//!
//! - `core`: Shared utilities (pager wrapper, debug logging)
//! - `io`: Byte source and byte sink abstractions
//! - `lines`: Line records and the line reader
//! - `diff`: LCS table, backtrace, trimming and output

pub mod core;
pub mod diff;
pub mod io;
pub mod lines;
