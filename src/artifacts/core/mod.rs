//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("trimmed head={} tail={}", head, tail);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!("[lcsdiff] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use debug_log;

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager only accepts text, so diff output is pushed to it after a
/// lossy UTF-8 conversion. Raw bytes are preserved everywhere else; only the
/// interactive pager view replaces invalid sequences.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writer.write_all(b"+ added line\n")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
