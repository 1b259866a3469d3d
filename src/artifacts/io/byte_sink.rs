use std::io::{self, Write};

/// Push interface accepting bytes and reporting failure.
///
/// Every `Write` is a sink; a short or failed write surfaces as an error and
/// nothing is retried.
pub trait ByteSink {
    fn put_byte(&mut self, byte: u8) -> io::Result<()>;

    fn put_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        bytes.iter().try_for_each(|&byte| self.put_byte(byte))
    }
}

impl<W: Write + ?Sized> ByteSink for W {
    fn put_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }
}
