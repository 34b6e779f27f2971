//! Owned source bytes.
//!
//! Source files are read as raw bytes, not `String`: the scanner only
//! accepts ASCII, and any other byte must surface as an "unexpected
//! character" error at its position rather than as a decoding failure
//! before scanning starts.

use std::io;
use std::path::Path;

use crate::SourceCursor;

/// The full contents of one source file.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Saturates at `u32::MAX`; spans cannot address past it anyway.
    len: u32,
}

impl SourceBuffer {
    /// Buffer over an in-memory source string.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    /// Buffer over arbitrary bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        SourceBuffer { bytes, len }
    }

    /// Read a whole file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        std::fs::read(path).map(Self::from_bytes)
    }

    /// Source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor positioned at byte 0.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(self.as_bytes())
    }
}

impl std::fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
