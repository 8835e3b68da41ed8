use lexers::{MathToken, VARIABLE};
use log::trace;

use crate::errors::{CalcError, Result};
use crate::operators;

/// Names the calculator keypad can produce for built-in constants.
pub const CONSTANTS: &[&str] = &["pi", "π", "e"];

fn is_numeric(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn convert(run: &str) -> Result<MathToken> {
    if run.matches('.').count() > 1 {
        return Err(CalcError::MultipleDecimalPoints(run.to_string()));
    }
    run.parse::<f64>()
        .map(MathToken::Number)
        .map_err(|_| CalcError::BadToken(run.to_string()))
}

fn classify_term(term: &str, prev: Option<&MathToken>) -> Result<MathToken> {
    match term {
        "(" => Ok(MathToken::OParen),
        ")" => Ok(MathToken::CParen),
        _ if term == VARIABLE => Ok(MathToken::Variable(term.to_string())),
        _ if CONSTANTS.contains(&term) => Ok(MathToken::Constant(term.to_string())),
        _ => operators::classify(term, prev).ok_or_else(|| CalcError::BadToken(term.to_string())),
    }
}

/// Collapse keypress-sized terms into tokens: each run of digits and decimal
/// points becomes one `Number`, everything else is classified in order.
///
/// `["1", ".", "5", "+", "2"]` gives `[Number(1.5), BOp("+"), Number(2.0)]`.
pub fn unify<S: AsRef<str>>(input: &[S]) -> Result<Vec<MathToken>> {
    let mut unified = Vec::new();
    let mut number = String::new();

    for term in input.iter().map(AsRef::as_ref) {
        if is_numeric(term) {
            number.push_str(term);
            continue;
        }
        if !number.is_empty() {
            unified.push(convert(&number)?);
            number.clear();
        }
        let token = classify_term(term, unified.last())?;
        unified.push(token);
    }
    if !number.is_empty() {
        unified.push(convert(&number)?);
    }
    trace!("unified {:?}", unified);
    Ok(unified)
}
