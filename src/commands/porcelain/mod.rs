//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `diff`: Compare two inputs line by line
pub mod diff;
