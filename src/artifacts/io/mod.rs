//! Byte-level stream abstractions
//!
//! The line reader pulls single bytes from a [`ByteSource`] and the emitter
//! pushes bytes into a [`ByteSink`]. Both are implemented for the standard
//! `Read`/`Write` machinery so files, stdin, stdout and in-memory buffers
//! plug in directly.

pub mod byte_sink;
pub mod byte_source;

pub use byte_sink::ByteSink;
pub use byte_source::ByteSource;
