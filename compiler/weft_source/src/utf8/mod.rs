//! Single-codepoint UTF-8 decoding.
//!
//! Sources read the lead byte first, ask [`sequence_width`] how many bytes
//! the codepoint spans, then read the rest and hand the whole sequence to
//! [`decode`]. No normalization is performed.

use crate::SourceError;

/// Width in bytes of the UTF-8 sequence introduced by `lead`.
///
/// Returns `None` for continuation bytes and bytes that can never start a
/// well-formed sequence (`0xC0`, `0xC1`, `0xF5..=0xFF`).
pub(crate) fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decode a complete sequence into exactly one `char`.
pub(crate) fn decode(bytes: &[u8]) -> Result<char, SourceError> {
    let mut chars = std::str::from_utf8(bytes)
        .map_err(|_| invalid(bytes))?
        .chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid(bytes)),
    }
}

pub(crate) fn invalid(bytes: &[u8]) -> SourceError {
    SourceError::InvalidUtf8 {
        bytes: bytes.to_vec(),
    }
}
