use lexers::MathToken;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

/// Classification of an operator symbol. For unary operators the
/// associativity doubles as fixity: `Right` ops are written before their
/// operand (`-3`, `√4`, `sin x`), `Left` ops after it (`3 x²`).
#[derive(PartialEq, Debug)]
pub struct OperatorSpec {
    pub symbol: &'static str,
    pub precedence: usize,
    pub assoc: Assoc,
    pub arity: Arity,
}

impl OperatorSpec {
    pub fn is_postfix(&self) -> bool {
        self.arity == Arity::Unary && self.assoc == Assoc::Left
    }
}

const fn op(symbol: &'static str, precedence: usize, assoc: Assoc, arity: Arity) -> OperatorSpec {
    OperatorSpec { symbol, precedence, assoc, arity }
}

// You can play with the relation between exponentiation and unary - by
// changing the precedence of '-' respect to '^'. Being equal and right
// associative, -2^2 is -(2^2) while 2^-2 still finds its operand.
pub static OPERATORS: &[OperatorSpec] = &[
    op("+", 2, Assoc::Left, Arity::Binary),
    op("-", 2, Assoc::Left, Arity::Binary),
    op("*", 3, Assoc::Left, Arity::Binary),
    op("×", 3, Assoc::Left, Arity::Binary),
    op("/", 3, Assoc::Left, Arity::Binary),
    op("÷", 3, Assoc::Left, Arity::Binary),
    op("%", 3, Assoc::Left, Arity::Binary),
    op("-", 5, Assoc::Right, Arity::Unary), // negation
    op("^", 5, Assoc::Right, Arity::Binary),
    op("√", 6, Assoc::Right, Arity::Unary),
    op("1/x", 6, Assoc::Right, Arity::Unary),
    op("x²", 6, Assoc::Left, Arity::Unary),
    op("sqrt", 7, Assoc::Right, Arity::Unary),
    op("sin", 7, Assoc::Right, Arity::Unary),
    op("cos", 7, Assoc::Right, Arity::Unary),
    op("tan", 7, Assoc::Right, Arity::Unary),
    op("asin", 7, Assoc::Right, Arity::Unary),
    op("acos", 7, Assoc::Right, Arity::Unary),
    op("atan", 7, Assoc::Right, Arity::Unary),
    op("log", 7, Assoc::Right, Arity::Unary), // natural log
    op("exp", 7, Assoc::Right, Arity::Unary),
    op("abs", 7, Assoc::Right, Arity::Unary),
];

// function-call syntax binds like any named unary op
static FUNCTION: OperatorSpec = op("f()", 7, Assoc::Right, Arity::Unary);

pub fn lookup(symbol: &str, arity: Arity) -> Option<&'static OperatorSpec> {
    OPERATORS.iter().find(|spec| spec.symbol == symbol && spec.arity == arity)
}

/// Table entry for an operator token, `None` for operands/parens or
/// symbols the table doesn't know.
pub fn operator_spec(mt: &MathToken) -> Option<&'static OperatorSpec> {
    match mt {
        MathToken::BOp(o) => lookup(o, Arity::Binary),
        MathToken::UOp(o) => lookup(o, Arity::Unary),
        MathToken::Function(f) => lookup(f, Arity::Unary).or(Some(&FUNCTION)),
        _ => None,
    }
}

/// Does `mt` close an operand? After it an operator is binary or postfix.
pub fn ends_operand(mt: &MathToken) -> bool {
    mt.ends_operand() || operator_spec(mt).map_or(false, |spec| spec.is_postfix())
}

/// Turn a raw operator string into a UOp/BOp token. A symbol listed with both
/// arities ('-') is unary wherever an operand is expected.
pub fn classify(symbol: &str, prev: Option<&MathToken>) -> Option<MathToken> {
    let after_operand = prev.map_or(false, ends_operand);
    let unary = lookup(symbol, Arity::Unary);
    let binary = lookup(symbol, Arity::Binary);
    match (unary, binary) {
        (Some(u), Some(_)) if !after_operand && !u.is_postfix() => Some(MathToken::UOp(symbol.to_string())),
        (Some(u), Some(_)) if after_operand && u.is_postfix() => Some(MathToken::UOp(symbol.to_string())),
        (_, Some(_)) => Some(MathToken::BOp(symbol.to_string())),
        (Some(_), None) => Some(MathToken::UOp(symbol.to_string())),
        (None, None) => None,
    }
}

pub fn apply_binary(op: &str, l: f64, r: f64) -> Option<f64> {
    match op {
        "+" => Some(l + r),
        "-" => Some(l - r),
        "*" | "×" => Some(l * r),
        "/" | "÷" => Some(l / r),
        "%" => Some(l % r),
        "^" => Some(l.powf(r)),
        _ => None,
    }
}

pub fn apply_unary(op: &str, o: f64) -> Option<f64> {
    match op {
        "-" => Some(-o),
        "√" | "sqrt" => Some(o.sqrt()),
        "1/x" => Some(1.0 / o),
        "x²" => Some(o * o),
        "sin" => Some(o.sin()),
        "cos" => Some(o.cos()),
        "tan" => Some(o.tan()),
        "asin" => Some(o.asin()),
        "acos" => Some(o.acos()),
        "atan" => Some(o.atan()),
        "log" => Some(o.ln()),
        "exp" => Some(o.exp()),
        "abs" => Some(o.abs()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_entry_per_symbol_and_arity() {
        let mut seen = HashSet::new();
        for spec in OPERATORS {
            assert!(seen.insert((spec.symbol, spec.arity)), "duplicate {}", spec.symbol);
        }
    }

    #[test]
    fn every_entry_can_be_applied() {
        for spec in OPERATORS {
            let applied = match spec.arity {
                Arity::Unary => apply_unary(spec.symbol, 0.5),
                Arity::Binary => apply_binary(spec.symbol, 2.0, 0.5),
            };
            assert!(applied.is_some(), "no implementation for {}", spec.symbol);
        }
    }

    #[test]
    fn minus_by_context() {
        let bop = |s: &str| MathToken::BOp(s.to_string());
        let uop = |s: &str| MathToken::UOp(s.to_string());
        assert_eq!(classify("-", None), Some(uop("-")));
        assert_eq!(classify("-", Some(&MathToken::OParen)), Some(uop("-")));
        assert_eq!(classify("-", Some(&bop("*"))), Some(uop("-")));
        assert_eq!(classify("-", Some(&MathToken::Number(1.0))), Some(bop("-")));
        assert_eq!(classify("-", Some(&MathToken::CParen)), Some(bop("-")));
        assert_eq!(classify("-", Some(&uop("x²"))), Some(bop("-")));
        assert_eq!(classify("√", Some(&MathToken::Number(1.0))), Some(uop("√")));
        assert_eq!(classify("&", None), None);
    }

    #[test]
    fn precedences() {
        let spec = |mt: MathToken| operator_spec(&mt).unwrap();
        assert!(spec(MathToken::BOp(format!("*"))).precedence > spec(MathToken::BOp(format!("+"))).precedence);
        assert_eq!(spec(MathToken::BOp(format!("^"))).assoc, Assoc::Right);
        assert_eq!(spec(MathToken::Function(format!("cosh"))).precedence, 7);
        assert_eq!(operator_spec(&MathToken::OParen), None);
    }
}
