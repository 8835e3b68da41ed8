#![deny(warnings)]

use std::fmt;
use std::str::FromStr;

use crate::scanner::Scanner;

/// Name of the free variable an expression is written in.
pub const VARIABLE: &str = "x";

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f64),
    Variable(String),
    Constant(String),
    Function(String),
    UOp(String), BOp(String),
    OParen, CParen,
}

impl MathToken {
    /// Literal text of the token, numbers rendered in their shortest form.
    pub fn symbol(&self) -> String {
        match self {
            MathToken::Number(n) => n.to_string(),
            MathToken::Unknown(s) | MathToken::Variable(s) | MathToken::Constant(s) |
            MathToken::Function(s) | MathToken::UOp(s) | MathToken::BOp(s) => s.clone(),
            MathToken::OParen => "(".to_string(),
            MathToken::CParen => ")".to_string(),
        }
    }

    /// Can this token end an operand? (a following '-' would be binary)
    pub fn ends_operand(&self) -> bool {
        matches!(self, MathToken::Number(_) | MathToken::Variable(_) |
                       MathToken::Constant(_) | MathToken::CParen)
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Splits an algebraic expression like `3x + sin(x)^2` into tokens.
/// Identifiers followed by `(` are functions, [`VARIABLE`] is the variable
/// and every other identifier is a named constant.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>,
    pos: usize,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None, pos: 0}
    }

    /// Char offset where the last returned token started.
    pub fn pos(&self) -> usize { self.pos }

    // when would a minus be unary? we need to know the prev token
    fn makes_unary(prev: &Option<MathToken>) -> bool {
        match prev {
            Some(token) => !token.ends_operand(),
            None => true,
        }
    }

    fn get_token(&mut self) -> Option<MathToken> {
        self.src.ignore_ws(); // discard whatever came before + and spaces
        self.pos = self.src.start();
        if let Some(op) = self.src.scan_math_op() {
            match op.as_ref() {
                "(" => Some(MathToken::OParen),
                ")" => Some(MathToken::CParen),
                "-" if Self::makes_unary(&self.prev) => Some(MathToken::UOp(op)),
                _ => Some(MathToken::BOp(op)),
            }
        } else if let Some(id) = self.src.scan_identifier() {
            match self.src.peek() {
                Some('(') => Some(MathToken::Function(id)),
                _ if id == VARIABLE => Some(MathToken::Variable(id)),
                _ => Some(MathToken::Constant(id)),
            }
        } else if let Some(num) = self.src.scan_number() {
            if let Some(bad) = self.src.scan_number_tail(&num) {
                return Some(MathToken::Unknown(bad));
            }
            match f64::from_str(&num) {
                Ok(n) => Some(MathToken::Number(n)),
                Err(_) => Some(MathToken::Unknown(num)),
            }
        } else if self.src.next().is_some() {
            Some(MathToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }

    /// Like `next` but also returns where the token started.
    pub fn next_spanned(&mut self) -> Option<(usize, MathToken)> {
        let token = self.get_token();
        self.prev = token.clone();
        token.map(|t| (self.pos, t))
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_spanned().map(|(_, token)| token)
    }
}

///////////////////////////////////////////////////////////////////////////////
