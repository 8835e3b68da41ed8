use std::fmt;
use std::ops;
use std::str::FromStr;

use log::debug;

use crate::ast::AstParser;
use crate::builder::build_operation;
use crate::errors::SymbolicError;

/// A closed-form expression in one variable. Trees are immutable: every
/// transformation, [`Operation::derivative`] included, builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Constant(f64),
    Variable,
    Negate(Box<Operation>),
    Addition(Box<Operation>, Box<Operation>),
    Subtraction(Box<Operation>, Box<Operation>),
    Product(Box<Operation>, Box<Operation>),
    Division(Box<Operation>, Box<Operation>),
    Pow(Box<Operation>, Box<Operation>),
    Sin(Box<Operation>),
    Cos(Box<Operation>),
    Tan(Box<Operation>),
    Asin(Box<Operation>),
    Acos(Box<Operation>),
    Atan(Box<Operation>),
    Log(Box<Operation>),
    Sqrt(Box<Operation>),
    Exp(Box<Operation>),
    Abs(Box<Operation>),
}

use Operation::*;

impl Operation {
    /// Wrap `arg` in one of the single-argument variants, eg: `Operation::of(Sin, x)`.
    pub fn of(variant: fn(Box<Operation>) -> Operation, arg: Operation) -> Operation {
        variant(Box::new(arg))
    }

    pub fn pow(base: Operation, exponent: Operation) -> Operation {
        Pow(Box::new(base), Box::new(exponent))
    }

    /// Value at `x`. Domain problems are left to IEEE-754: log(-1) is NaN,
    /// 1/0 is inf. Check `is_finite` before showing the result.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Constant(c) => *c,
            Variable => x,
            Negate(f) => -f.evaluate(x),
            Addition(f, g) => f.evaluate(x) + g.evaluate(x),
            Subtraction(f, g) => f.evaluate(x) - g.evaluate(x),
            Product(f, g) => f.evaluate(x) * g.evaluate(x),
            Division(f, g) => f.evaluate(x) / g.evaluate(x),
            Pow(f, g) => f.evaluate(x).powf(g.evaluate(x)),
            Sin(f) => f.evaluate(x).sin(),
            Cos(f) => f.evaluate(x).cos(),
            Tan(f) => f.evaluate(x).tan(),
            Asin(f) => f.evaluate(x).asin(),
            Acos(f) => f.evaluate(x).acos(),
            Atan(f) => f.evaluate(x).atan(),
            Log(f) => f.evaluate(x).ln(),
            Sqrt(f) => f.evaluate(x).sqrt(),
            Exp(f) => f.evaluate(x).exp(),
            Abs(f) => f.evaluate(x).abs(),
        }
    }

    /// True when the tree doesn't mention the variable, eg: `-2` or `pi/2`.
    pub fn is_constant(&self) -> bool {
        match self {
            Constant(_) => true,
            Variable => false,
            Addition(f, g) | Subtraction(f, g) | Product(f, g) | Division(f, g) | Pow(f, g) => {
                f.is_constant() && g.is_constant()
            }
            Negate(f) | Sin(f) | Cos(f) | Tan(f) | Asin(f) | Acos(f) | Atan(f) |
            Log(f) | Sqrt(f) | Exp(f) | Abs(f) => f.is_constant(),
        }
    }

    /// Differentiate `n` times, `nth_derivative(0)` is a copy of `self`.
    pub fn nth_derivative(&self, n: usize) -> Operation {
        (0..n).fold(self.clone(), |op, _| op.derivative())
    }
}

impl FromStr for Operation {
    type Err = SymbolicError;

    /// Parse an expression in `x` straight into an operation tree.
    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        let op = build_operation(&AstParser::parse_str(expr)?)?;
        debug!("{:?} is {}", expr, op);
        Ok(op)
    }
}

/// Fully parenthesized infix, eg: `((3 * x) + 5)`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let function = |name: &str, arg: &Operation| format!("{}({})", name, arg);
        let s = match self {
            Constant(c) => format!("{}", c),
            Variable => lexers::VARIABLE.to_string(),
            Negate(g) => format!("(-{})", g),
            Addition(l, r) => format!("({} + {})", l, r),
            Subtraction(l, r) => format!("({} - {})", l, r),
            Product(l, r) => format!("({} * {})", l, r),
            Division(l, r) => format!("({} / {})", l, r),
            Pow(l, r) => format!("({} ^ {})", l, r),
            Sin(g) => function("sin", g),
            Cos(g) => function("cos", g),
            Tan(g) => function("tan", g),
            Asin(g) => function("asin", g),
            Acos(g) => function("acos", g),
            Atan(g) => function("atan", g),
            Log(g) => function("log", g),
            Sqrt(g) => function("sqrt", g),
            Exp(g) => function("exp", g),
            Abs(g) => function("abs", g),
        };
        write!(f, "{}", s)
    }
}

impl ops::Neg for Operation {
    type Output = Operation;
    fn neg(self) -> Operation {
        Negate(Box::new(self))
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl ops::$trait for Operation {
            type Output = Operation;
            fn $method(self, rhs: Operation) -> Operation {
                $variant(Box::new(self), Box::new(rhs))
            }
        }
    };
}

binary_op!(Add, add, Addition);
binary_op!(Sub, sub, Subtraction);
binary_op!(Mul, mul, Product);
binary_op!(Div, div, Division);
