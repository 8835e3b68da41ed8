#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum CalcError {
    #[error("Syntax error: number `{0}` has more than one decimal point")]
    MultipleDecimalPoints(String),
    #[error("Syntax error: not enough operands for `{0}`")]
    MissingOperands(String),
    #[error("Syntax error: expression leaves {0} values")]
    Malformed(usize),
    #[error("Syntax error: bad token `{0}`")]
    BadToken(String),
    #[error("Parenthesis mismatch")]
    ParenthesisMismatch,
    #[error("Unknown variable `{0}`")]
    UnknownVar(String),
}

impl CalcError {
    /// Everything a calculator would show as a plain "Syntax error".
    pub fn is_syntax_error(&self) -> bool {
        matches!(self,
            CalcError::MultipleDecimalPoints(_) |
            CalcError::MissingOperands(_) |
            CalcError::Malformed(_) |
            CalcError::BadToken(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
