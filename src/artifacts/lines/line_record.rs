use bytes::Bytes;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One line of input, stored exactly as read.
///
/// The terminator stays part of the content: two records are equal only if
/// their bytes match, terminator included. Cloning is cheap and never copies
/// the underlying bytes.
#[derive(Clone, Eq)]
pub struct LineRecord {
    bytes: Bytes,
    terminated: bool,
}

impl LineRecord {
    pub fn new(bytes: impl Into<Bytes>, terminated: bool) -> Self {
        Self {
            bytes: bytes.into(),
            terminated,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the line ended with the reader's delimiter.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The line without its terminator.
    pub fn body(&self) -> &[u8] {
        let (body, _) = self.split_terminator();
        body
    }

    /// The terminator byte(s), empty for an unterminated last line.
    pub fn terminator(&self) -> &[u8] {
        let (_, terminator) = self.split_terminator();
        terminator
    }

    fn split_terminator(&self) -> (&[u8], &[u8]) {
        if self.terminated && !self.bytes.is_empty() {
            self.bytes.split_at(self.bytes.len() - 1)
        } else {
            (&self.bytes[..], &[])
        }
    }
}

impl PartialEq for LineRecord {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Hash for LineRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for LineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.bytes))
    }
}

/// Builds a newline-terminated record when the text ends with `\n`.
impl From<&str> for LineRecord {
    fn from(text: &str) -> Self {
        let terminated = text.ends_with('\n');
        Self::new(Bytes::copy_from_slice(text.as_bytes()), terminated)
    }
}

impl AsRef<[u8]> for LineRecord {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
