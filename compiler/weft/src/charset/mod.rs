//! Character-class descriptions.
//!
//! A compact set description in the spirit of a regex bracket expression,
//! without the brackets:
//!
//! | Pattern | Members |
//! |---------|---------|
//! | `abc` | `a`, `b`, `c` |
//! | `0-9` | `0` through `9` (inclusive) |
//! | `a-z_` | lowercase letters and `_` |
//! | `-+` / `+-` | `-` and `+` (a leading or trailing `-` is literal) |
//! | `\-\\` | `-` and `\` (backslash escapes the next character) |
//!
//! Ranges are expanded when the set is built, so membership is a single
//! hash lookup at match time.

use rustc_hash::FxHashSet;

use crate::CharSetError;

/// An expanded set of codepoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: FxHashSet<char>,
}

/// One character of the pattern, and whether it was escaped.
#[derive(Clone, Copy)]
struct Atom {
    c: char,
    escaped: bool,
}

impl Atom {
    fn is_range_dash(self) -> bool {
        self.c == '-' && !self.escaped
    }
}

impl CharSet {
    /// Expand a compact description into a set.
    pub fn parse(pattern: &str) -> Result<Self, CharSetError> {
        let atoms = tokenize(pattern)?;
        let mut chars = FxHashSet::default();

        let mut i = 0;
        while i < atoms.len() {
            let start = atoms[i].c;
            match (atoms.get(i + 1), atoms.get(i + 2)) {
                (Some(dash), Some(end)) if dash.is_range_dash() => {
                    if end.c < start {
                        return Err(CharSetError::InvertedRange { start, end: end.c });
                    }
                    chars.extend(start..=end.c);
                    i += 3;
                }
                _ => {
                    chars.insert(start);
                    i += 1;
                }
            }
        }

        Ok(CharSet { chars })
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

fn tokenize(pattern: &str) -> Result<Vec<Atom>, CharSetError> {
    let mut atoms = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let escaped = chars.next().ok_or(CharSetError::DanglingEscape)?;
            atoms.push(Atom {
                c: escaped,
                escaped: true,
            });
        } else {
            atoms.push(Atom { c, escaped: false });
        }
    }
    Ok(atoms)
}
