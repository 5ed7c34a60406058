//! Position-seekable input sources for the weft combinator engine.
//!
//! Every combinator in `weft` talks to its input through the [`Source`]
//! trait: it saves the cursor, reads, and restores the cursor when the
//! attempt fails. That save/restore discipline is what makes backtracking
//! correct, so the contract here is deliberately small.
//!
//! # Contract
//!
//! - [`Source::save`] returns the current cursor as an opaque [`Position`].
//! - [`Source::restore`] moves the cursor back (or forward) to a saved position.
//! - [`Source::read_exact`] and [`Source::read_codepoint`] read at the cursor
//!   and advance past what they return.
//!
//! A short read reports [`SourceError::Eof`]. The source performs no implicit
//! rollback on failure; the caller restores to the position it saved before
//! the read.
//!
//! # Implementations
//!
//! - [`SliceSource`]: in-memory text, used by `Grammar::parse_text`.
//! - [`ReaderSource`]: any `Read + Seek` (files, `io::Cursor`, ...).

mod error;
mod position;
mod reader;
mod slice;
mod utf8;

pub use error::SourceError;
pub use position::Position;
pub use reader::ReaderSource;
pub use slice::SliceSource;

/// Random-access input with a saveable cursor.
///
/// Object safe: combinators receive `&mut dyn Source`.
pub trait Source {
    /// Capture the current cursor.
    fn save(&mut self) -> Position;

    /// Move the cursor to a previously saved position.
    fn restore(&mut self, position: Position);

    /// Read exactly `len` bytes.
    ///
    /// Returns [`SourceError::Eof`] if fewer than `len` bytes remain.
    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, SourceError>;

    /// Read one UTF-8 encoded codepoint.
    ///
    /// A truncated sequence is reported as [`SourceError::Eof`], a malformed
    /// one as [`SourceError::InvalidUtf8`].
    fn read_codepoint(&mut self) -> Result<char, SourceError>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn save(&mut self) -> Position {
        (**self).save()
    }

    fn restore(&mut self, position: Position) {
        (**self).restore(position);
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        (**self).read_exact(len)
    }

    fn read_codepoint(&mut self) -> Result<char, SourceError> {
        (**self).read_codepoint()
    }
}
