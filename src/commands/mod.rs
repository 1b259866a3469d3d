//! Command implementations
//!
//! Commands are implemented as methods on [`crate::areas::comparison::Comparison`]
//! so the binary only parses arguments and picks a writer.

pub mod porcelain;
