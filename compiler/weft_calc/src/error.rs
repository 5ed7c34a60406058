//! Calculator errors.

use thiserror::Error;
use weft::{BindError, CharSetError, ParseError};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression did not parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A complete expression was followed by input it could not use.
    #[error("unexpected trailing input {rest:?}")]
    TrailingInput { rest: String },

    /// The match tree did not have the shape the evaluator expects.
    #[error("malformed expression tree: {0}")]
    Malformed(String),

    #[error("invalid character class: {0}")]
    CharSet(#[from] CharSetError),

    #[error("cannot bind grammar: {0}")]
    Bind(#[from] BindError),
}
