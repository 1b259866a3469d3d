//! Line-oriented diff built on a longest common subsequence table
//!
//! - `areas`: the `Comparison` that binds two inputs, a writer and options
//! - `artifacts`: byte streams, line records and the diff engine
//! - `commands`: operations exposed to the command line

pub mod areas;
pub mod artifacts;
pub mod commands;
