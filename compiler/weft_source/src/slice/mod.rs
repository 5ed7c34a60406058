//! In-memory source over a byte slice.

use crate::utf8::{decode, invalid, sequence_width};
use crate::{Position, Source, SourceError};

/// Source over borrowed text (or raw bytes).
///
/// Reads never advance the cursor unless they succeed, so a short read
/// leaves the cursor where it was. The cursor is a plain index, which makes
/// `save`/`restore` free.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a source over raw bytes, which need not be valid UTF-8.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, pos: 0 }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos as u64)
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

impl Source for SliceSource<'_> {
    #[inline]
    fn save(&mut self) -> Position {
        self.position()
    }

    /// A position past the end (saved from a longer source) clamps to the
    /// end.
    fn restore(&mut self, position: Position) {
        let pos = usize::try_from(position.offset()).unwrap_or(usize::MAX);
        self.pos = pos.min(self.bytes.len());
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        let remaining = self.remaining();
        if remaining.len() < len {
            return Err(SourceError::Eof);
        }
        self.pos += len;
        Ok(remaining[..len].to_vec())
    }

    fn read_codepoint(&mut self) -> Result<char, SourceError> {
        let remaining = self.remaining();
        let Some(&lead) = remaining.first() else {
            return Err(SourceError::Eof);
        };
        let width = sequence_width(lead).ok_or_else(|| invalid(&[lead]))?;
        if remaining.len() < width {
            return Err(SourceError::Eof);
        }
        let c = decode(&remaining[..width])?;
        self.pos += width;
        Ok(c)
    }
}
