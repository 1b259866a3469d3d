//! Comparison components
//!
//! - `comparison`: the pair of inputs, options and output writer of one run
//! - `input`: a diff input read from a file or standard input

pub mod comparison;
pub mod input;
