use std::f64::consts;

use lexers::MathToken;
use log::trace;

use crate::ast::AstNode;
use crate::errors::{Result, SymbolicError};
use crate::operation::Operation::{self, *};

fn constant(name: &str) -> Result<Operation> {
    match name {
        "pi" => Ok(Constant(consts::PI)),
        "e" => Ok(Constant(consts::E)),
        _ => Err(SymbolicError::UnknownSymbol(name.to_string())),
    }
}

fn function(node: &AstNode, name: &str) -> Result<Operation> {
    let arg = node.right.as_deref()
        .ok_or_else(|| SymbolicError::MissingOperand(name.to_string()))?;
    let variant: fn(Box<Operation>) -> Operation = match name {
        "sqrt" => Sqrt,
        "sin" => Sin,
        "cos" => Cos,
        "tan" => Tan,
        "asin" => Asin,
        "acos" => Acos,
        "atan" => Atan,
        "log" => Log,
        "exp" => Exp,
        "abs" => Abs,
        _ => return Err(SymbolicError::UnknownSymbol(name.to_string())),
    };
    Ok(Operation::of(variant, build_operation(arg)?))
}

fn operator(node: &AstNode, op: &str) -> Result<Operation> {
    match (node.left.as_deref(), node.right.as_deref()) {
        (Some(l), Some(r)) => {
            let (l, r) = (build_operation(l)?, build_operation(r)?);
            match op {
                "+" => Ok(l + r),
                "-" => Ok(l - r),
                "*" => Ok(l * r),
                "/" => Ok(l / r),
                "^" => Ok(Operation::pow(l, r)),
                _ => Err(SymbolicError::MalformedOperator(op.to_string())),
            }
        }
        (None, Some(r)) if op == "-" => Ok(-build_operation(r)?),
        _ => Err(SymbolicError::MalformedOperator(op.to_string())),
    }
}

/// Turn a parsed tree into an [`Operation`] that can be evaluated and
/// differentiated.
pub fn build_operation(node: &AstNode) -> Result<Operation> {
    trace!("building {:?}", node.token);
    match &node.token {
        MathToken::Number(n) => Ok(Constant(*n)),
        MathToken::Variable(_) => Ok(Variable),
        MathToken::Constant(name) => constant(name),
        MathToken::Function(name) => function(node, name),
        MathToken::UOp(op) | MathToken::BOp(op) => operator(node, op),
        other => Err(SymbolicError::UnknownSymbol(other.symbol())),
    }
}

#[cfg(test)]
mod tests {
    use super::build_operation;
    use crate::ast::AstNode;
    use crate::errors::SymbolicError;
    use crate::operation::Operation::{self, *};
    use lexers::MathToken;
    use pretty_assertions::assert_eq;

    fn num(n: f64) -> AstNode {
        AstNode::leaf(MathToken::Number(n))
    }

    fn x() -> AstNode {
        AstNode::leaf(MathToken::Variable(format!("x")))
    }

    #[test]
    fn leaves() {
        assert_eq!(build_operation(&num(2.5)), Ok(Constant(2.5)));
        assert_eq!(build_operation(&x()), Ok(Variable));
        let pi = AstNode::leaf(MathToken::Constant(format!("pi")));
        assert_eq!(build_operation(&pi), Ok(Constant(std::f64::consts::PI)));
        let tau = AstNode::leaf(MathToken::Constant(format!("tau")));
        assert_eq!(build_operation(&tau), Err(SymbolicError::UnknownSymbol(format!("tau"))));
    }

    #[test]
    fn operators() {
        let sum = AstNode::binary(MathToken::BOp(format!("+")), num(3.0), x());
        assert_eq!(build_operation(&sum), Ok(Constant(3.0) + Variable));
        let neg = AstNode::unary(MathToken::UOp(format!("-")), x());
        assert_eq!(build_operation(&neg), Ok(-Variable));
        let pow = AstNode::binary(MathToken::BOp(format!("^")), x(), num(2.0));
        assert_eq!(build_operation(&pow), Ok(Operation::pow(Variable, Constant(2.0))));
    }

    #[test]
    fn malformed_operators() {
        let plus = AstNode::unary(MathToken::UOp(format!("+")), x());
        assert_eq!(build_operation(&plus), Err(SymbolicError::MalformedOperator(format!("+"))));
        let lonely = AstNode::leaf(MathToken::BOp(format!("*")));
        assert_eq!(build_operation(&lonely), Err(SymbolicError::MalformedOperator(format!("*"))));
        let modulo = AstNode::binary(MathToken::BOp(format!("%")), x(), num(2.0));
        assert_eq!(build_operation(&modulo), Err(SymbolicError::MalformedOperator(format!("%"))));
    }

    #[test]
    fn functions() {
        let sin = AstNode::unary(MathToken::Function(format!("sin")), x());
        assert_eq!(build_operation(&sin), Ok(Operation::of(Sin, Variable)));
        let cosh = AstNode::unary(MathToken::Function(format!("cosh")), x());
        assert_eq!(build_operation(&cosh), Err(SymbolicError::UnknownSymbol(format!("cosh"))));
        let bare = AstNode::leaf(MathToken::Function(format!("log")));
        assert_eq!(build_operation(&bare), Err(SymbolicError::MissingOperand(format!("log"))));
    }
}
