use std::io::{self, Read};

/// Pull interface yielding the next byte, or `None` at end of input.
pub trait ByteSource {
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<R: Read> ByteSource for io::Bytes<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.next().transpose()
    }
}

impl ByteSource for &[u8] {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }
}
