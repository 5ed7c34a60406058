//! Arithmetic on `f64`, parsed with weft.
//!
//! Supports signed decimals, parentheses, and the binary operators `^`,
//! `*` `/`, `+` `-` (tightest first, each left-associative).
//!
//! ```ignore
//! let grammar = weft_calc::expression_grammar()?;
//! assert_eq!(weft_calc::evaluate(&grammar, "(1+2)*3")?, 9.0);
//! ```

mod error;
mod eval;
mod grammar;

use tracing::debug;
use weft::{Grammar, SliceSource};

pub use error::CalcError;
pub use eval::fold;
pub use grammar::{expression_grammar, NUMBER};

/// Parse `text` as a whole expression and compute its value.
///
/// Input left over after the longest expression prefix is an error, as is
/// a `(` without its `)`.
pub fn evaluate(grammar: &Grammar, text: &str) -> Result<f64, CalcError> {
    let mut source = SliceSource::new(text);
    let tree = grammar.parse(&mut source)?;
    if !source.is_at_end() {
        let rest = String::from_utf8_lossy(source.remaining()).into_owned();
        return Err(CalcError::TrailingInput { rest });
    }
    debug!(%tree, "parsed");
    fold(&tree)
}
