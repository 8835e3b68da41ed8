use lexers::{MathToken, MathTokenizer};
use log::{debug, trace};

use crate::errors::{CalcError, Result};
use crate::operators::{operator_spec, Assoc};

/// An expression in postfix order, ready for evaluation.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<MathToken>);

impl RPNExpr {
    /// The postfix sequence as plain symbols, eg: `["3", "4", "2", "*", "+"]`.
    pub fn symbols(&self) -> Vec<String> {
        self.0.iter().map(MathToken::symbol).collect()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    /// Tokenize and parse a typed-in expression like `3 + 4*sin(x)`.
    pub fn parse_str(expr: &str) -> Result<RPNExpr> {
        Self::parse(MathTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: impl IntoIterator<Item = MathToken>) -> Result<RPNExpr> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            trace!("token {:?} | out {:?} | stack {:?}", token, out, stack);
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::Variable(_) => out.push(token),
                MathToken::Constant(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                // unary ops wait on the stack until their operand is out
                MathToken::UOp(_) | MathToken::Function(_) => stack.push(token),
                MathToken::BOp(_) => {
                    let rhs = operator_spec(&token).ok_or_else(|| CalcError::BadToken(token.symbol()))?;
                    while let Some(top) = stack.pop() {
                        let pops = match operator_spec(&top) {
                            Some(lhs) => lhs.precedence > rhs.precedence ||
                                (lhs.precedence == rhs.precedence && rhs.assoc == Assoc::Left),
                            None if top == MathToken::OParen => false,
                            None => return Err(CalcError::BadToken(top.symbol())),
                        };
                        if !pops {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    stack.push(token);
                }
                MathToken::CParen => {
                    loop {
                        match stack.pop() {
                            Some(MathToken::OParen) => break,
                            Some(other) => out.push(other),
                            None => return Err(CalcError::ParenthesisMismatch),
                        }
                    }
                    // end of grouping: a unary op waiting on it is now complete
                    match stack.pop() {
                        Some(op @ MathToken::UOp(_)) | Some(op @ MathToken::Function(_)) => out.push(op),
                        Some(other) => stack.push(other),
                        None => (),
                    }
                }
                MathToken::Unknown(lexeme) => return Err(CalcError::BadToken(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => return Err(CalcError::ParenthesisMismatch),
                token => out.push(token),
            }
        }
        debug!("postfix {:?}", out);
        Ok(RPNExpr(out))
    }
}
