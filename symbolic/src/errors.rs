#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),
    #[error("missing operand for `{0}`")]
    MissingOperand(String),
    #[error("malformed number `{0}`")]
    BadNumber(String),
    #[error("parenthesis mismatch")]
    ParenthesisMismatch,
    #[error("empty expression")]
    EmptyExpression,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("parse error (c. {pos}): {kind}")]
pub struct ParseError {
    /// Char offset of the offending token.
    pub pos: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(pos: usize, kind: ParseErrorKind) -> Self {
        Self { pos, kind }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SymbolicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),
    #[error("missing operand for `{0}`")]
    MissingOperand(String),
    #[error("malformed operator `{0}`")]
    MalformedOperator(String),
}

pub type Result<T> = std::result::Result<T, SymbolicError>;
