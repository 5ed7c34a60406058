//! The expression grammar.
//!
//! ```text
//! expr   := sum
//! sum    := term  (("+" | "-") term)*
//! term   := power (("*" | "/") power)*
//! power  := atom  ("^" atom)*
//! atom   := number | "(" expr ")"
//! number := "-"? digit+ ("." digit+)?
//! ```
//!
//! There is no whitespace handling: `1 + 2` stops after `1`.
//!
//! Node actions rewrite each rule's raw match as it is produced, so the
//! tree handed to [`evaluate`](crate::evaluate) is already small:
//!
//! | Input | Tree |
//! |-------|------|
//! | `-4.5` | `number:"-4.5"` |
//! | `1+2-3` | `-:[+:[number:"1" number:"2"] number:"3"]` |
//! | `(7)` | `number:"7"` |

use tracing::trace;
use weft::{
    alternative, char_class, commit, discard, literal, optional, repeat, sequence, tag, Grammar,
    Match, ParseError,
};

use crate::CalcError;

/// Tag on every number leaf. Operator nodes are tagged with the operator.
pub const NUMBER: &str = "number";

const OPERATOR: &str = "op";

/// Build the calculator grammar.
///
/// Building is not free; build once and share the result, across threads if
/// needed.
pub fn expression_grammar() -> Result<Grammar, CalcError> {
    let expr = Grammar::placeholder();

    let digit = char_class("0-9")?;
    let number = sequence([
        optional(literal("-")),
        repeat(1, 0, digit.clone()),
        optional(sequence([literal("."), repeat(1, 0, digit)])),
    ])
    .on_match(|m| Ok(Match::tagged(NUMBER, Match::literal(m.flatten()))));

    // Past the `(`, this can only be a group.
    let group = sequence([
        discard(literal("(")),
        commit([expr.clone(), discard(literal(")"))]),
    ])
    .on_match(unwrap_group);

    let atom = alternative([number, group]);
    let power = left_assoc(atom, "^")?;
    let term = left_assoc(power, "*/")?;
    let sum = left_assoc(term, "+-")?;

    expr.rebind(&sum)?;
    Ok(expr)
}

/// `operand (op operand)*`, folded left to right into binary nodes.
///
/// A trailing operator with no operand after it is left unconsumed.
fn left_assoc(operand: Grammar, operators: &str) -> Result<Grammar, CalcError> {
    let operator = tag(OPERATOR, char_class(operators)?);
    let tail = repeat(0, 0, sequence([operator, operand.clone()]));
    Ok(sequence([operand, tail]).on_match(fold_left))
}

/// `[first [[op:"+" rhs] ...]]` to `+:[first rhs]`, and so on.
fn fold_left(m: Match) -> Result<Match, ParseError> {
    let parts = match m {
        Match::Sequence(parts) => parts,
        other => return Err(unexpected("operator chain", &other)),
    };
    let Ok([mut acc, Match::Sequence(steps)]) = <[Match; 2]>::try_from(parts) else {
        return Err(ParseError::rejected("operator chain is not operand plus tail"));
    };
    for step in steps {
        let pair = match step {
            Match::Sequence(pair) => pair,
            other => return Err(unexpected("operator step", &other)),
        };
        let Ok([op, rhs]) = <[Match; 2]>::try_from(pair) else {
            return Err(ParseError::rejected("operator step is not operator plus operand"));
        };
        let Some(op) = op.find_tag(OPERATOR).and_then(Match::as_literal) else {
            return Err(unexpected("operator", &op));
        };
        trace!(op, "fold");
        acc = Match::tagged(op, Match::Sequence(vec![acc, rhs]));
    }
    Ok(acc)
}

/// Strip the sequences `(` `expr` `)` leaves around the inner tree.
fn unwrap_group(m: Match) -> Result<Match, ParseError> {
    let mut current = m;
    loop {
        match current {
            Match::Sequence(mut items) if items.len() == 1 => {
                current = items.pop().unwrap_or_default();
            }
            Match::Tagged { .. } => return Ok(current),
            other => return Err(unexpected("group", &other)),
        }
    }
}

fn unexpected(what: &str, found: &Match) -> ParseError {
    ParseError::rejected(format!("unexpected {what} shape {found}"))
}
