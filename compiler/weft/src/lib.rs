//! Backtracking parser-combinator engine.
//!
//! Build a grammar bottom-up out of primitive matchers and structural
//! combinators, attach node actions with [`Grammar::on_match`], then run it
//! with [`Grammar::parse`] or [`Grammar::parse_text`].
//!
//! ```ignore
//! use weft::{alternative, char_class, literal, optional, repeat, sequence, tag, Match};
//!
//! let digits = repeat(1, 0, char_class("0-9")?);
//! let sign = alternative([literal("+"), literal("-")]);
//! let number = sequence([optional(sign), tag("digits", digits)]);
//!
//! let m = number.parse_text("-42")?;
//! assert_eq!(m.find_tag("digits").map(Match::flatten), Some("42".into()));
//! ```
//!
//! # Modules
//!
//! - [`matches`]: the [`Match`] tree and tag search.
//! - [`combinator`]: `literal`, `char_class`, `sequence`, `alternative`,
//!   `repeat`, `optional`, `discard`, `commit`, `tag`.
//! - [`grammar`]: the [`Grammar`] handle, placeholders and node actions.
//! - [`error`]: recoverable vs fatal failures.
//!
//! # Non-features
//!
//! No memoization: a grammar with exponential backtracking is exponential.
//! No left-recursion detection: a recursive alternative reachable without
//! consuming input never terminates.

pub mod charset;
pub mod combinator;
pub mod error;
pub mod grammar;
pub mod matches;

pub use charset::CharSet;
pub use combinator::{
    alternative, char_class, char_set, commit, discard, literal, optional, repeat, sequence, tag,
};
pub use error::{BindError, CharSetError, Failure, ParseError};
pub use grammar::Grammar;
pub use matches::Match;

pub use weft_source::{Position, ReaderSource, SliceSource, Source, SourceError};
