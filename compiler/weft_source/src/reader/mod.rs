//! Source over any `Read + Seek`.

use std::io::{self, Read, Seek, SeekFrom};

use crate::utf8::{decode, invalid, sequence_width};
use crate::{Position, Source, SourceError};

/// Source over a seekable reader such as a `File` or an `io::Cursor`.
///
/// The offset is tracked locally so [`Source::save`] never touches the
/// reader. [`Source::restore`] seeks; since the trait gives it no way to
/// report failure, a failed seek is parked and returned by the next read.
///
/// A short read leaves the reader advanced past the bytes it did get.
/// Combinators restore to their saved position on failure, so this is
/// never observable through a grammar.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    offset: u64,
    pending: Option<io::Error>,
}

impl<R: Read + Seek> ReaderSource<R> {
    /// Wrap `reader`, starting at its current stream position.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let offset = reader.stream_position()?;
        Ok(ReaderSource {
            reader,
            offset,
            pending: None,
        })
    }

    /// Current position.
    pub fn position(&self) -> Position {
        Position::new(self.offset)
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn check_pending(&mut self) -> Result<(), SourceError> {
        match self.pending.take() {
            Some(err) => Err(SourceError::Io(err)),
            None => Ok(()),
        }
    }

    /// Read until `buf` is full or the reader is exhausted.
    ///
    /// Returns how many bytes were read; the offset advances by that much
    /// even when an error cuts the read short.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let mut filled = 0;
        let result = loop {
            if filled == buf.len() {
                break Ok(filled);
            }
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break Ok(filled),
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => break Err(SourceError::Io(err)),
            }
        };
        self.offset += filled as u64;
        result
    }
}

impl<R: Read + Seek> Source for ReaderSource<R> {
    fn save(&mut self) -> Position {
        self.position()
    }

    fn restore(&mut self, position: Position) {
        if position.offset() == self.offset && self.pending.is_none() {
            return;
        }
        match self.reader.seek(SeekFrom::Start(position.offset())) {
            Ok(offset) => {
                self.offset = offset;
                self.pending = None;
            }
            Err(err) => self.pending = Some(err),
        }
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        self.check_pending()?;
        let mut buf = vec![0; len];
        if self.fill(&mut buf)? < len {
            return Err(SourceError::Eof);
        }
        Ok(buf)
    }

    fn read_codepoint(&mut self) -> Result<char, SourceError> {
        self.check_pending()?;
        let mut buf = [0u8; 4];
        if self.fill(&mut buf[..1])? == 0 {
            return Err(SourceError::Eof);
        }
        let width = sequence_width(buf[0]).ok_or_else(|| invalid(&buf[..1]))?;
        if self.fill(&mut buf[1..width])? < width - 1 {
            return Err(SourceError::Eof);
        }
        decode(&buf[..width])
    }
}

#[cfg(test)]
mod tests;
