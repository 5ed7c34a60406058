#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn source(text: &str) -> ReaderSource<Cursor<Vec<u8>>> {
    ReaderSource::new(Cursor::new(text.as_bytes().to_vec())).unwrap()
}

/// Reader whose seeks fail while `broken` is set.
struct BrokenSeek {
    inner: Cursor<Vec<u8>>,
    broken: bool,
}

impl Read for BrokenSeek {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for BrokenSeek {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if self.broken {
            return Err(io::Error::other("seek refused"));
        }
        self.inner.seek(pos)
    }
}

#[test]
fn test_reads_and_tracks_offset() {
    let mut src = source("hello");
    assert_eq!(src.read_exact(2).unwrap(), b"he");
    assert_eq!(src.position(), Position::new(2));
    assert_eq!(src.read_codepoint().unwrap(), 'l');
    assert_eq!(src.save(), Position::new(3));
}

#[test]
fn test_starts_at_stream_position() {
    let mut cursor = Cursor::new(b"abcdef".to_vec());
    cursor.set_position(4);
    let mut src = ReaderSource::new(cursor).unwrap();
    assert_eq!(src.save(), Position::new(4));
    assert_eq!(src.read_exact(2).unwrap(), b"ef");
}

#[test]
fn test_short_read_is_eof_and_restorable() {
    let mut src = source("ab");
    let start = src.save();
    assert!(src.read_exact(3).unwrap_err().is_eof());
    src.restore(start);
    assert_eq!(src.read_exact(2).unwrap(), b"ab");
}

#[test]
fn test_codepoints() {
    let mut src = source("π🦀");
    assert_eq!(src.read_codepoint().unwrap(), 'π');
    assert_eq!(src.read_codepoint().unwrap(), '🦀');
    assert!(src.read_codepoint().unwrap_err().is_eof());
}

#[test]
fn test_truncated_codepoint_is_eof() {
    let bytes = "🦀".as_bytes()[..3].to_vec();
    let mut src = ReaderSource::new(Cursor::new(bytes)).unwrap();
    assert!(src.read_codepoint().unwrap_err().is_eof());
}

#[test]
fn test_failed_seek_reported_on_next_read() {
    let reader = BrokenSeek {
        inner: Cursor::new(b"abc".to_vec()),
        broken: false,
    };
    let mut src = ReaderSource::new(reader).unwrap();
    let start = src.save();
    src.read_exact(1).unwrap();

    src.reader.broken = true;
    src.restore(start);
    assert!(matches!(src.read_exact(1), Err(SourceError::Io(_))));

    src.reader.broken = false;
    src.restore(start);
    assert_eq!(src.read_exact(3).unwrap(), b"abc");
}

#[test]
fn test_into_inner() {
    let mut src = source("xyz");
    src.read_exact(1).unwrap();
    assert_eq!(src.into_inner().position(), 1);
}
