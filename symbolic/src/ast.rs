use lexers::{MathToken, MathTokenizer};
use log::{debug, trace};
use shunting::operators::{operator_spec, Arity, Assoc};

use crate::errors::{ParseError, ParseErrorKind};

/// Binary tree over tokens. Unary operators and functions only use `right`.
#[derive(Clone, Debug, PartialEq)]
pub struct AstNode {
    pub token: MathToken,
    pub left: Option<Box<AstNode>>,
    pub right: Option<Box<AstNode>>,
}

impl AstNode {
    pub fn leaf(token: MathToken) -> Self {
        AstNode { token, left: None, right: None }
    }

    pub fn unary(token: MathToken, right: AstNode) -> Self {
        AstNode { token, left: None, right: Some(Box::new(right)) }
    }

    pub fn binary(token: MathToken, left: AstNode, right: AstNode) -> Self {
        AstNode { token, left: Some(Box::new(left)), right: Some(Box::new(right)) }
    }
}

type Result<T> = std::result::Result<T, ParseError>;

// Shunting-yard that reduces straight into tree nodes instead of emitting
// postfix. `expect_operand` tracks whether the next token must start an
// operand, which is what lets us spot implicit products and missing operands.
struct TreeBuilder {
    operands: Vec<AstNode>,
    stack: Vec<(usize, MathToken)>,
    expect_operand: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder { operands: Vec::new(), stack: Vec::new(), expect_operand: true }
    }

    fn reduce(&mut self, pos: usize, op: MathToken) -> Result<()> {
        let missing = || ParseError::new(pos, ParseErrorKind::MissingOperand(op.symbol()));
        let right = self.operands.pop().ok_or_else(missing)?;
        let node = match operator_spec(&op) {
            Some(spec) if spec.arity == Arity::Binary => {
                let left = self.operands.pop().ok_or_else(missing)?;
                AstNode::binary(op, left, right)
            }
            _ => AstNode::unary(op, right),
        };
        trace!("reduced {:?}", node.token);
        self.operands.push(node);
        Ok(())
    }

    // error for an operand that never showed up, blamed on whoever wanted it.
    // `closing` is the ')' that came too early, None at end of input.
    fn missing_operand(&self, pos: usize, closing: Option<&MathToken>) -> ParseError {
        match (self.stack.last(), closing) {
            (Some((ppos, MathToken::OParen)), _) => match (self.stack.iter().rev().nth(1), closing) {
                (Some((fpos, MathToken::Function(f))), _) => {
                    ParseError::new(*fpos, ParseErrorKind::MissingOperand(f.clone()))
                }
                (_, Some(token)) => ParseError::new(pos, ParseErrorKind::UnexpectedToken(token.symbol())),
                (_, None) => ParseError::new(*ppos, ParseErrorKind::ParenthesisMismatch),
            },
            (Some((opos, op)), _) => ParseError::new(*opos, ParseErrorKind::MissingOperand(op.symbol())),
            (None, Some(token)) => ParseError::new(pos, ParseErrorKind::UnexpectedToken(token.symbol())),
            (None, None) => ParseError::new(pos, ParseErrorKind::EmptyExpression),
        }
    }

    fn operand(&mut self, pos: usize, token: MathToken) -> Result<()> {
        self.implicit_product(pos, &token)?;
        self.operands.push(AstNode::leaf(token));
        self.expect_operand = false;
        Ok(())
    }

    // `3x`, `2pi`, `3sin(x)`, `(x+1)(x-1)`
    fn implicit_product(&mut self, pos: usize, token: &MathToken) -> Result<()> {
        if self.expect_operand {
            return Ok(());
        }
        match token {
            MathToken::Variable(_) | MathToken::Constant(_) |
            MathToken::Function(_) | MathToken::OParen => {
                trace!("implicit product before {:?}", token);
                self.binary(pos, MathToken::BOp("*".to_string()))
            }
            _ => Err(ParseError::new(pos, ParseErrorKind::UnexpectedToken(token.symbol()))),
        }
    }

    fn prefix(&mut self, pos: usize, token: MathToken) -> Result<()> {
        self.implicit_product(pos, &token)?;
        self.stack.push((pos, token));
        self.expect_operand = true;
        Ok(())
    }

    fn binary(&mut self, pos: usize, token: MathToken) -> Result<()> {
        if self.expect_operand {
            return Err(ParseError::new(pos, ParseErrorKind::MissingOperand(token.symbol())));
        }
        let rhs = operator_spec(&token)
            .ok_or_else(|| ParseError::new(pos, ParseErrorKind::UnexpectedToken(token.symbol())))?;
        while let Some((top_pos, top)) = self.stack.pop() {
            let pops = match operator_spec(&top) {
                Some(lhs) => lhs.precedence > rhs.precedence ||
                    (lhs.precedence == rhs.precedence && rhs.assoc == Assoc::Left),
                None => false,
            };
            if !pops {
                self.stack.push((top_pos, top));
                break;
            }
            self.reduce(top_pos, top)?;
        }
        self.stack.push((pos, token));
        self.expect_operand = true;
        Ok(())
    }

    fn close_group(&mut self, pos: usize) -> Result<()> {
        if self.expect_operand {
            return Err(self.missing_operand(pos, Some(&MathToken::CParen)));
        }
        loop {
            match self.stack.pop() {
                Some((_, MathToken::OParen)) => break,
                Some((top_pos, top)) => self.reduce(top_pos, top)?,
                None => return Err(ParseError::new(pos, ParseErrorKind::ParenthesisMismatch)),
            }
        }
        // end of grouping: check if this is a function call, a prefix '-'
        // keeps waiting so -(x)^2 stays -(x^2)
        match self.stack.pop() {
            Some((fpos, f @ MathToken::Function(_))) => self.reduce(fpos, f)?,
            Some(other) => self.stack.push(other),
            None => (),
        }
        Ok(())
    }

    fn finish(mut self, end: usize) -> Result<AstNode> {
        if self.expect_operand {
            if self.stack.is_empty() && self.operands.is_empty() {
                return Err(ParseError::new(0, ParseErrorKind::EmptyExpression));
            }
            return Err(self.missing_operand(end, None));
        }
        while let Some((pos, top)) = self.stack.pop() {
            match top {
                MathToken::OParen => return Err(ParseError::new(pos, ParseErrorKind::ParenthesisMismatch)),
                op => self.reduce(pos, op)?,
            }
        }
        match self.operands.pop() {
            Some(root) if self.operands.is_empty() => Ok(root),
            _ => Err(ParseError::new(end, ParseErrorKind::EmptyExpression)),
        }
    }
}

pub struct AstParser;

impl AstParser {
    /// Parse an algebraic expression in `x`, eg: `3x^2 + sin(2x)`.
    pub fn parse_str(expr: &str) -> Result<AstNode> {
        let mut lex = MathTokenizer::new(expr.chars());
        let mut tree = TreeBuilder::new();

        while let Some((pos, token)) = lex.next_spanned() {
            match token {
                MathToken::Number(_) | MathToken::Variable(_) | MathToken::Constant(_) => {
                    tree.operand(pos, token)?
                }
                MathToken::Function(_) | MathToken::OParen => tree.prefix(pos, token)?,
                MathToken::UOp(_) if tree.expect_operand => tree.prefix(pos, token)?,
                MathToken::BOp(_) => tree.binary(pos, token)?,
                MathToken::CParen => tree.close_group(pos)?,
                MathToken::Unknown(lexeme) => {
                    let kind = match lexeme.chars().next() {
                        Some(c) if c.is_ascii_digit() => ParseErrorKind::BadNumber(lexeme),
                        _ => ParseErrorKind::UnexpectedToken(lexeme),
                    };
                    return Err(ParseError::new(pos, kind));
                }
                other => {
                    return Err(ParseError::new(pos, ParseErrorKind::UnexpectedToken(other.symbol())))
                }
            }
        }
        let root = tree.finish(expr.chars().count())?;
        debug!("parsed {:?} into {:?}", expr, root);
        Ok(root)
    }
}
