//! Folding an expression tree to a value.

use weft::Match;
use weft_stack::ensure_sufficient_stack;

use crate::grammar::NUMBER;
use crate::CalcError;

/// Evaluate a tree built by [`expression_grammar`](crate::expression_grammar).
///
/// Arithmetic follows IEEE 754: dividing by zero yields an infinity or NaN,
/// not an error.
pub fn fold(tree: &Match) -> Result<f64, CalcError> {
    let Match::Tagged { name, inner } = tree else {
        return Err(CalcError::Malformed(format!("expected a tagged node, found {tree}")));
    };
    if name == NUMBER {
        let text = inner
            .as_literal()
            .ok_or_else(|| CalcError::Malformed(format!("number without text: {inner}")))?;
        return text
            .parse()
            .map_err(|_| CalcError::Malformed(format!("bad number {text:?}")));
    }

    let (lhs, rhs) = match inner.items() {
        Some([lhs, rhs]) => (
            ensure_sufficient_stack(|| fold(lhs))?,
            ensure_sufficient_stack(|| fold(rhs))?,
        ),
        _ => return Err(CalcError::Malformed(format!("operator {name} needs two operands"))),
    };
    match name.as_str() {
        "+" => Ok(lhs + rhs),
        "-" => Ok(lhs - rhs),
        "*" => Ok(lhs * rhs),
        "/" => Ok(lhs / rhs),
        "^" => Ok(lhs.powf(rhs)),
        other => Err(CalcError::Malformed(format!("unknown operator {other:?}"))),
    }
}
