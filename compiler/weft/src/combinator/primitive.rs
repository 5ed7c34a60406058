//! Primitive matchers: they read input directly.

use tracing::trace;

use crate::{CharSet, CharSetError, Failure, Grammar, Match, ParseError};

/// Match `text` exactly.
///
/// The empty literal always matches and consumes nothing.
pub fn literal(text: impl Into<String>) -> Grammar {
    let text: String = text.into();
    Grammar::from_fn(move |source| {
        let start = source.save();
        match source.read_exact(text.len()) {
            Ok(bytes) if bytes == text.as_bytes() => Ok(Some(Match::Literal(text.clone()))),
            Ok(bytes) => {
                source.restore(start);
                let found = String::from_utf8_lossy(&bytes).into_owned();
                trace!(expected = %text, %found, %start, "literal mismatch");
                Err(ParseError::Recoverable(Failure::Mismatch {
                    expected: text.clone(),
                    found,
                }))
            }
            Err(err) => {
                source.restore(start);
                Err(ParseError::from_source(err, &text))
            }
        }
    })
}

/// Match one codepoint from a compact set description such as `0-9` or
/// `a-zA-Z_` (see [`CharSet::parse`]).
///
/// The description is expanded here, once; a malformed one is reported now
/// rather than at parse time.
pub fn char_class(pattern: &str) -> Result<Grammar, CharSetError> {
    let set = CharSet::parse(pattern)?;
    Ok(char_set(set, format!("[{pattern}]")))
}

/// Match one codepoint from a prebuilt set. `label` is what mismatches
/// report as expected.
pub fn char_set(set: CharSet, label: impl Into<String>) -> Grammar {
    let label: String = label.into();
    Grammar::from_fn(move |source| {
        let start = source.save();
        match source.read_codepoint() {
            Ok(c) if set.contains(c) => Ok(Some(Match::Literal(c.to_string()))),
            Ok(c) => {
                source.restore(start);
                trace!(expected = %label, found = %c, %start, "char class mismatch");
                Err(ParseError::Recoverable(Failure::Mismatch {
                    expected: label.clone(),
                    found: c.to_string(),
                }))
            }
            Err(err) => {
                source.restore(start);
                Err(ParseError::from_source(err, &label))
            }
        }
    })
}
