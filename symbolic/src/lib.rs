//! Expressions in `x` as trees: parse them, evaluate them and take their
//! derivative symbolically.
//!
//! ```
//! use symbolic::Operation;
//!
//! let f: Operation = "x^2 + sin(x)".parse().unwrap();
//! let df = f.derivative();
//! assert_eq!(df.evaluate(0.0), 1.0);
//! assert_eq!(f.to_string(), "((x ^ 2) + sin(x))");
//! ```

pub use ast::{AstNode, AstParser};
pub use builder::build_operation;
pub use errors::{ParseError, ParseErrorKind, SymbolicError};
pub use operation::Operation;

mod ast;
#[cfg(test)]
mod ast_test;
mod builder;
mod derivative;
mod errors;
mod operation;
