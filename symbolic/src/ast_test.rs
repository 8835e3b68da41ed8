use crate::ast::{AstNode, AstParser};
use crate::errors::{ParseError, ParseErrorKind};
use lexers::MathToken;
use pretty_assertions::assert_eq;

fn num(n: f64) -> AstNode {
    AstNode::leaf(MathToken::Number(n))
}

fn var() -> AstNode {
    AstNode::leaf(MathToken::Variable(format!("x")))
}

fn bop(op: &str, l: AstNode, r: AstNode) -> AstNode {
    AstNode::binary(MathToken::BOp(op.to_string()), l, r)
}

fn neg(r: AstNode) -> AstNode {
    AstNode::unary(MathToken::UOp(format!("-")), r)
}

fn call(f: &str, r: AstNode) -> AstNode {
    AstNode::unary(MathToken::Function(f.to_string()), r)
}

fn err(input: &str) -> ParseError {
    match AstParser::parse_str(input) {
        Err(e) => e,
        Ok(ast) => panic!("{:?} parsed into {:?}", input, ast),
    }
}

#[test]
fn linear() {
    let ast = AstParser::parse_str("3x+5").unwrap();
    assert_eq!(ast, bop("+", bop("*", num(3.0), var()), num(5.0)));
}

#[test]
fn precedence_and_assoc() {
    assert_eq!(AstParser::parse_str("1 - 2 - 3").unwrap(),
               bop("-", bop("-", num(1.0), num(2.0)), num(3.0)));
    assert_eq!(AstParser::parse_str("2^3^2").unwrap(),
               bop("^", num(2.0), bop("^", num(3.0), num(2.0))));
    assert_eq!(AstParser::parse_str("1 + 2 * 3").unwrap(),
               bop("+", num(1.0), bop("*", num(2.0), num(3.0))));
    assert_eq!(AstParser::parse_str("(1 + 2) * 3").unwrap(),
               bop("*", bop("+", num(1.0), num(2.0)), num(3.0)));
}

#[test]
fn negation() {
    assert_eq!(AstParser::parse_str("-x^2").unwrap(), neg(bop("^", var(), num(2.0))));
    assert_eq!(AstParser::parse_str("-(x)^2").unwrap(), neg(bop("^", var(), num(2.0))));
    assert_eq!(AstParser::parse_str("-x*2").unwrap(), bop("*", neg(var()), num(2.0)));
    assert_eq!(AstParser::parse_str("2^-x").unwrap(), bop("^", num(2.0), neg(var())));
    assert_eq!(AstParser::parse_str("x - -1").unwrap(), bop("-", var(), neg(num(1.0))));
}

#[test]
fn functions() {
    assert_eq!(AstParser::parse_str("sin(x)^2").unwrap(),
               bop("^", call("sin", var()), num(2.0)));
    assert_eq!(AstParser::parse_str("exp(-x)").unwrap(), call("exp", neg(var())));
    assert_eq!(AstParser::parse_str("log(sqrt(x))").unwrap(),
               call("log", call("sqrt", var())));
}

#[test]
fn implicit_products() {
    let pi = AstNode::leaf(MathToken::Constant(format!("pi")));
    assert_eq!(AstParser::parse_str("2pi").unwrap(), bop("*", num(2.0), pi));
    assert_eq!(AstParser::parse_str("3sin(x)").unwrap(),
               bop("*", num(3.0), call("sin", var())));
    assert_eq!(AstParser::parse_str("2x^2").unwrap(),
               bop("*", num(2.0), bop("^", var(), num(2.0))));
    assert_eq!(AstParser::parse_str("(x+1)(x-1)").unwrap(),
               bop("*", bop("+", var(), num(1.0)), bop("-", var(), num(1.0))));
    assert_eq!(AstParser::parse_str("2(-x)").unwrap(), bop("*", num(2.0), neg(var())));
}

#[test]
fn operator_errors() {
    assert_eq!(err("3 + * 4"), ParseError::new(4, ParseErrorKind::MissingOperand(format!("*"))));
    assert_eq!(err("3 +"), ParseError::new(2, ParseErrorKind::MissingOperand(format!("+"))));
    assert_eq!(err("x^"), ParseError::new(1, ParseErrorKind::MissingOperand(format!("^"))));
    assert_eq!(err("* x"), ParseError::new(0, ParseErrorKind::MissingOperand(format!("*"))));
    assert_eq!(err("sin()"), ParseError::new(0, ParseErrorKind::MissingOperand(format!("sin"))));
    assert_eq!(err("2 3"), ParseError::new(2, ParseErrorKind::UnexpectedToken(format!("3"))));
}

#[test]
fn grouping_errors() {
    assert_eq!(err("()"), ParseError::new(1, ParseErrorKind::UnexpectedToken(format!(")"))));
    assert_eq!(err("(1 + 2"), ParseError::new(0, ParseErrorKind::ParenthesisMismatch));
    assert_eq!(err("1 + 2)"), ParseError::new(5, ParseErrorKind::ParenthesisMismatch));
    assert_eq!(err("(("), ParseError::new(1, ParseErrorKind::ParenthesisMismatch));
}

#[test]
fn lexical_errors() {
    assert_eq!(err("2 # 3"), ParseError::new(2, ParseErrorKind::UnexpectedToken(format!("#"))));
    assert_eq!(err("1.2.3 + x"), ParseError::new(0, ParseErrorKind::BadNumber(format!("1.2.3"))));
    assert_eq!(err("x + 12."), ParseError::new(4, ParseErrorKind::BadNumber(format!("12."))));
    assert_eq!(err(""), ParseError::new(0, ParseErrorKind::EmptyExpression));
    assert_eq!(err("   "), ParseError::new(0, ParseErrorKind::EmptyExpression));
}

#[test]
fn error_messages() {
    assert_eq!(err("2 # 3").to_string(), "parse error (c. 2): unexpected token `#`");
    assert_eq!(err("(1 + 2").to_string(), "parse error (c. 0): parenthesis mismatch");
}
