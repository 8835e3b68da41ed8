use crate::operators::{operator_spec, Arity, Assoc};
use crate::parser::RPNExpr;
use lexers::MathToken;
use std::fmt;

// operands never need parens
const ATOM: usize = usize::MAX;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a MathToken),
    Node(&'a MathToken, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the expression doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            let arity = match operator_spec(token) {
                Some(spec) if spec.arity == Arity::Binary => 2,
                Some(_) => 1,
                None => {
                    ops.push(AST::Leaf(token));
                    continue;
                }
            };
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(AST::Node(token, operands));
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

// keypad glyphs print as their typed-in spelling
fn text_symbol(op: String) -> String {
    match op.as_str() {
        "×" => "*".to_string(),
        "÷" => "/".to_string(),
        _ => op,
    }
}

fn is_named(op: &str) -> bool {
    op.chars().all(char::is_alphabetic)
}

fn printer(root: &AST) -> (String, usize) {
    match root {
        AST::Leaf(token) => (token.symbol(), ATOM),
        AST::Node(token, args) => {
            let spec = match operator_spec(token) {
                Some(spec) => spec,
                None => unreachable!("only operators get children"),
            };
            let prec = spec.precedence;
            let op = text_symbol(token.symbol());
            match spec.arity {
                Arity::Unary => {
                    let subtree = printer(&args[0]);
                    let wrap = prec > subtree.1;
                    if is_named(&op) {
                        (format!("{}({})", op, subtree.0), prec)
                    } else if spec.is_postfix() && wrap {
                        (format!("({}){}", subtree.0, op), prec)
                    } else if spec.is_postfix() {
                        (format!("{}{}", subtree.0, op), prec)
                    } else if wrap {
                        (format!("{}({})", op, subtree.0), prec)
                    } else {
                        (format!("{}{}", op, subtree.0), prec)
                    }
                }
                Arity::Binary => {
                    let (lhs, rhs) = (printer(&args[0]), printer(&args[1]));
                    let lh = if prec > lhs.1 || (prec == lhs.1 && spec.assoc != Assoc::Left) {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    let rh = if prec > rhs.1 || (prec == rhs.1 && spec.assoc != Assoc::Right) {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    // NOTE: '2+(3+4)' will show parens to indicate that user
                    // explicitly put them there
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }
    }
}

/// Renders the expression back in infix with the fewest parens needed.
/// Postfix sequences that don't form one tree print as plain symbols.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => write!(f, "{}", self.symbols().join(" ")),
        }
    }
}
