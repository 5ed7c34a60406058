//! Parse failures.
//!
//! Every failure carries its *kind* as data:
//!
//! | Kind | Meaning | Who produces it |
//! |------|---------|-----------------|
//! | `Recoverable` | This path didn't match; try another | primitives, `alternative`, node actions |
//! | `Fatal` | Right path, malformed input; stop backtracking | `commit`, source I/O, unbound placeholders |
//!
//! Combinators branch on the kind directly. A fatal error is never demoted
//! back to recoverable by anything above it.

use thiserror::Error;
use weft_source::SourceError;

/// What went wrong, independent of whether it can be backtracked over.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Failure {
    /// The input ended before the matcher had enough to look at.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The input did not match.
    #[error("expected {expected:?}, found {found:?}")]
    Mismatch { expected: String, found: String },

    /// Every branch of an `alternative` failed; one entry per branch, in order.
    #[error("no alternative matched [{}]", join_failures(.0))]
    NoAlternative(Vec<Failure>),

    /// A node action refused the match it was given.
    #[error("rejected: {0}")]
    Rejected(String),

    /// A placeholder was parsed before `Grammar::rebind` gave it a body.
    #[error("grammar used before it was bound")]
    Unbound,

    /// The source failed to read.
    #[error("source read failed: {0}")]
    Io(String),
}

fn join_failures(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A failure tagged with how far backtracking may unwind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Try the next alternative.
    #[error(transparent)]
    Recoverable(#[from] Failure),

    /// Do not try anything else; report.
    #[error("fatal: {0}")]
    Fatal(Failure),
}

impl ParseError {
    /// A recoverable refusal, for use in node actions.
    pub fn rejected(reason: impl Into<String>) -> Self {
        ParseError::Recoverable(Failure::Rejected(reason.into()))
    }

    /// Returns `true` if this error stops backtracking.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Fatal(_))
    }

    /// The underlying failure, whatever the kind.
    pub fn failure(&self) -> &Failure {
        match self {
            ParseError::Recoverable(failure) | ParseError::Fatal(failure) => failure,
        }
    }

    pub fn into_failure(self) -> Failure {
        match self {
            ParseError::Recoverable(failure) | ParseError::Fatal(failure) => failure,
        }
    }

    /// Promote to fatal. A fatal error is returned as is, never re-wrapped.
    #[must_use]
    pub fn into_fatal(self) -> Self {
        ParseError::Fatal(self.into_failure())
    }

    /// Translate a failed read. `expected` describes what the reader wanted.
    ///
    /// End of input and undecodable bytes are ordinary mismatches. An I/O
    /// failure is fatal: there is no input left to backtrack over.
    pub(crate) fn from_source(err: SourceError, expected: &str) -> Self {
        match err {
            SourceError::Eof => ParseError::Recoverable(Failure::UnexpectedEof),
            SourceError::InvalidUtf8 { bytes } => ParseError::Recoverable(Failure::Mismatch {
                expected: expected.to_owned(),
                found: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            SourceError::Io(err) => ParseError::Fatal(Failure::Io(err.to_string())),
        }
    }
}

/// Why [`Grammar::rebind`](crate::Grammar::rebind) refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BindError {
    /// The grammar already has an operation; placeholders bind exactly once.
    #[error("grammar is already bound")]
    AlreadyBound,

    /// The target resolves back to this placeholder through bindings alone,
    /// so parsing would recurse without ever reaching a combinator.
    #[error("binding would make the grammar an alias of itself")]
    Cycle,
}

/// Malformed character-class description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CharSetError {
    #[error("inverted range '{start}-{end}'")]
    InvertedRange { start: char, end: char },

    #[error("character class ends with a dangling '\\'")]
    DanglingEscape,
}
