//! Saved cursor positions.

use std::fmt;

/// A saved cursor: the byte offset from the start of the source.
///
/// Positions are only meaningful for the source that produced them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u64);

impl Position {
    /// The start of a source.
    pub const START: Position = Position(0);

    #[inline]
    pub const fn new(offset: u64) -> Self {
        Position(offset)
    }

    /// Byte offset from the start of the source.
    #[inline]
    pub const fn offset(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte {}", self.0)
    }
}
