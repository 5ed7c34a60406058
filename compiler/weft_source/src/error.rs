//! Read failures.

use std::io;

use thiserror::Error;

/// Why a read from a [`Source`](crate::Source) failed.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Fewer bytes remained than the read required.
    #[error("unexpected end of input")]
    Eof,

    /// The bytes at the cursor are not a valid UTF-8 sequence.
    #[error("invalid UTF-8 sequence {bytes:02x?}")]
    InvalidUtf8 { bytes: Vec<u8> },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SourceError {
    /// Returns `true` for [`SourceError::Eof`].
    pub fn is_eof(&self) -> bool {
        matches!(self, SourceError::Eof)
    }
}
