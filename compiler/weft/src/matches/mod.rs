//! The match tree.
//!
//! A successful parse produces a [`Match`]: literal leaves, ordered
//! sequences, and named wrappers. Every traversal here matches on all three
//! variants exhaustively.

use std::fmt;

/// A parse result.
///
/// # Invariants
///
/// - A `Sequence` never holds a placeholder for discarded input; `discard`
///   removes the slot entirely.
/// - A `Tagged` owns exactly one inner match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Match {
    /// Raw matched text.
    Literal(String),
    /// Results of a structural combinator, in declaration order.
    Sequence(Vec<Match>),
    /// A named wrapper produced by `tag`.
    Tagged { name: String, inner: Box<Match> },
}

impl Match {
    /// The empty sequence: what a discarded result looks like wherever a
    /// value is required.
    pub fn empty() -> Self {
        Match::Sequence(Vec::new())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Match::Literal(text.into())
    }

    pub fn tagged(name: impl Into<String>, inner: Match) -> Self {
        Match::Tagged {
            name: name.into(),
            inner: Box::new(inner),
        }
    }

    /// The text of a `Literal`.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Match::Literal(text) => Some(text),
            Match::Sequence(_) | Match::Tagged { .. } => None,
        }
    }

    /// The children of a `Sequence`.
    pub fn items(&self) -> Option<&[Match]> {
        match self {
            Match::Sequence(items) => Some(items),
            Match::Literal(_) | Match::Tagged { .. } => None,
        }
    }

    /// The name of a `Tagged`.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Match::Tagged { name, .. } => Some(name),
            Match::Literal(_) | Match::Sequence(_) => None,
        }
    }

    /// Depth-first search for the first tag called `name`.
    ///
    /// Returns the tagged value (not the wrapper). Sequence children are
    /// searched in order, and a tag with a different name is searched
    /// through.
    pub fn find_tag(&self, name: &str) -> Option<&Match> {
        match self {
            Match::Literal(_) => None,
            Match::Sequence(items) => items.iter().find_map(|item| item.find_tag(name)),
            Match::Tagged { name: tag, inner } if tag == name => Some(&**inner),
            Match::Tagged { inner, .. } => inner.find_tag(name),
        }
    }

    /// Every value tagged `name`, in document order.
    ///
    /// The search continues inside a found tag, so nested tags of the same
    /// name are all reported, outermost first.
    pub fn find_all_tags(&self, name: &str) -> Vec<&Match> {
        let mut found = Vec::new();
        self.collect_tags(name, &mut found);
        found
    }

    fn collect_tags<'a>(&'a self, name: &str, found: &mut Vec<&'a Match>) {
        match self {
            Match::Literal(_) => {}
            Match::Sequence(items) => {
                for item in items {
                    item.collect_tags(name, found);
                }
            }
            Match::Tagged { name: tag, inner } => {
                if tag == name {
                    found.push(&**inner);
                }
                inner.collect_tags(name, found);
            }
        }
    }

    /// The text this match spans: literal leaves concatenated in order.
    ///
    /// Tags are transparent: a `Tagged` flattens to its inner value's text.
    pub fn flatten(&self) -> String {
        let mut text = String::new();
        self.flatten_into(&mut text);
        text
    }

    fn flatten_into(&self, text: &mut String) {
        match self {
            Match::Literal(literal) => text.push_str(literal),
            Match::Sequence(items) => {
                for item in items {
                    item.flatten_into(text);
                }
            }
            Match::Tagged { inner, .. } => inner.flatten_into(text),
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::empty()
    }
}

/// Compact tree form: `"lit"`, `[a b c]`, `name:inner`.
impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Literal(text) => write!(f, "{text:?}"),
            Match::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Match::Tagged { name, inner } => write!(f, "{name}:{inner}"),
        }
    }
}
