use std::collections::HashMap;

use lexers::MathToken;
use log::{debug, trace};

use crate::errors::{CalcError, Result};
use crate::operators::{apply_binary, apply_unary};
use crate::parser::RPNExpr;

/// Values for the names an expression can mention.
#[derive(Clone, Debug)]
pub struct MathContext(pub HashMap<String, f64>);

impl Default for MathContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MathContext {
    pub fn new() -> MathContext {
        use std::f64::consts;
        let mut cx = HashMap::new();
        cx.insert(format!("pi"), consts::PI);
        cx.insert(format!("π"), consts::PI);
        cx.insert(format!("e"), consts::E);
        MathContext(cx)
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.0.insert(var.to_string(), val);
    }

    fn lookup(&self, name: &str) -> Result<f64> {
        self.0.get(name).copied().ok_or_else(|| CalcError::UnknownVar(name.to_string()))
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64> {
        let mut operands = Vec::new();

        for token in rpn.0.iter() {
            match token {
                MathToken::Number(num) => operands.push(*num),
                MathToken::Variable(var) | MathToken::Constant(var) => operands.push(self.lookup(var)?),
                MathToken::BOp(op) => {
                    let missing = || CalcError::MissingOperands(op.clone());
                    let r = operands.pop().ok_or_else(missing)?;
                    let l = operands.pop().ok_or_else(missing)?;
                    let result = apply_binary(op, l, r).ok_or_else(|| CalcError::BadToken(op.clone()))?;
                    trace!("{} {} {} = {}", l, op, r, result);
                    operands.push(result);
                }
                MathToken::UOp(op) | MathToken::Function(op) => {
                    let o = operands.pop().ok_or_else(|| CalcError::MissingOperands(op.clone()))?;
                    let result = apply_unary(op, o).ok_or_else(|| CalcError::BadToken(op.clone()))?;
                    trace!("{}({}) = {}", op, o, result);
                    operands.push(result);
                }
                _ => return Err(CalcError::BadToken(token.symbol())),
            }
        }
        match operands.as_slice() {
            [result] => {
                debug!("{:?} = {}", rpn.symbols(), result);
                Ok(*result)
            }
            _ => Err(CalcError::Malformed(operands.len())),
        }
    }

    /// Evaluate with `var` bound to `val`, leaving the context untouched.
    pub fn eval_at(&self, rpn: &RPNExpr, var: &str, val: f64) -> Result<f64> {
        let mut cx = self.clone();
        cx.setvar(var, val);
        cx.eval(rpn)
    }
}
