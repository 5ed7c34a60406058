//! Structural combinators: they own the backtracking protocol.

use tracing::trace;
use weft_source::Source;

use crate::grammar::Outcome;
use crate::{Failure, Grammar, Match, ParseError};

/// Match every item, in order, against the same advancing input.
///
/// Fails with the first failing item's error, after rewinding to where the
/// sequence started (unless that error is fatal). Discarded results are
/// left out of the resulting `Sequence`.
pub fn sequence(items: impl IntoIterator<Item = Grammar>) -> Grammar {
    let items: Vec<Grammar> = items.into_iter().collect();
    Grammar::from_fn(move |source| run_items(&items, source, false))
}

/// Like [`sequence`], but any failure is fatal.
///
/// Put this after a prefix that uniquely identifies a construct (a keyword,
/// an opening bracket): once the prefix matched, malformed input in the rest
/// is reported instead of being quietly backtracked around by an enclosing
/// [`alternative`].
pub fn commit(items: impl IntoIterator<Item = Grammar>) -> Grammar {
    let items: Vec<Grammar> = items.into_iter().collect();
    Grammar::from_fn(move |source| run_items(&items, source, true))
}

fn run_items(items: &[Grammar], source: &mut dyn Source, committed: bool) -> Outcome {
    let start = source.save();
    let mut matches = Vec::with_capacity(items.len());
    for item in items {
        match item.run(source) {
            Ok(matched) => matches.extend(matched),
            Err(err) => {
                let err = if committed {
                    if !err.is_fatal() {
                        trace!(%start, %err, "commit: failure after commit point is fatal");
                    }
                    err.into_fatal()
                } else {
                    err
                };
                if !err.is_fatal() {
                    source.restore(start);
                }
                return Err(err);
            }
        }
    }
    Ok(Some(Match::Sequence(matches)))
}

/// Try each choice in declaration order from the same position; the first
/// that matches wins.
///
/// Order, not match length, decides: `alternative([literal("+"),
/// literal("++")])` matches only `+` of `++`.
///
/// A fatal failure stops the search and is returned as is. If every choice
/// fails recoverably, the input is rewound and the error lists each
/// choice's failure.
pub fn alternative(choices: impl IntoIterator<Item = Grammar>) -> Grammar {
    let choices: Vec<Grammar> = choices.into_iter().collect();
    Grammar::from_fn(move |source| {
        let start = source.save();
        let mut failures = Vec::with_capacity(choices.len());
        for choice in &choices {
            source.restore(start);
            match choice.run(source) {
                Ok(matched) => return Ok(matched),
                Err(ParseError::Fatal(failure)) => return Err(ParseError::Fatal(failure)),
                Err(ParseError::Recoverable(failure)) => failures.push(failure),
            }
        }
        source.restore(start);
        trace!(%start, attempts = failures.len(), "alternative: nothing matched");
        Err(ParseError::Recoverable(Failure::NoAlternative(failures)))
    })
}

/// Match `item` at least `min` and at most `max` times; `max == 0` means
/// no upper bound.
///
/// Stops at the first recoverable failure of `item`. Zero matches is a
/// success when `min == 0`. If `min` exceeds a nonzero `max`, `max` wins.
///
/// An unbounded repeat also stops once an iteration succeeds without
/// consuming input (and `min` is met), since every later iteration would
/// do the same.
pub fn repeat(min: usize, max: usize, item: Grammar) -> Grammar {
    let min = if max == 0 { min } else { min.min(max) };
    Grammar::from_fn(move |source| {
        let start = source.save();
        let mut matches = Vec::new();
        let mut count = 0;
        while max == 0 || count < max {
            let before = source.save();
            match item.run(source) {
                Ok(matched) => {
                    count += 1;
                    matches.extend(matched);
                    if max == 0 && count >= min && source.save() == before {
                        break;
                    }
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    if count < min {
                        source.restore(start);
                        trace!(%start, count, min, "repeat: too few matches");
                        return Err(err);
                    }
                    // A failed node action may have consumed input.
                    source.restore(before);
                    break;
                }
            }
        }
        Ok(Some(Match::Sequence(matches)))
    })
}

/// Zero or one `item`: `repeat(0, 1, item)`.
pub fn optional(item: Grammar) -> Grammar {
    repeat(0, 1, item)
}

/// Match `item` but drop its result, so an enclosing [`sequence`] or
/// [`repeat`] has no slot for it.
pub fn discard(item: Grammar) -> Grammar {
    Grammar::from_fn(move |source| item.run(source).map(|_| None))
}

/// Wrap `item`'s result as `Tagged { name, .. }` so it can be found again
/// with [`Match::find_tag`].
pub fn tag(name: impl Into<String>, item: Grammar) -> Grammar {
    let name: String = name.into();
    Grammar::from_fn(move |source| {
        let inner = item.run(source)?.unwrap_or_default();
        Ok(Some(Match::tagged(name.clone(), inner)))
    })
}
