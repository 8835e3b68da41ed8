//! Calculator engine: turns the terms typed on a keypad (or a typed-in
//! expression) into postfix with the shunting-yard algorithm and evaluates it.
//!
//! ```
//! use shunting::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.calculate(&["1", "2", "+", "3", "x²"]), Ok(21.0));
//! ```

pub use errors::CalcError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

mod errors;
pub mod operators;
pub mod parser;

pub use self::calculator::Calculator;
pub use self::format::NumberFormatter;
pub use self::rpneval::MathContext;
pub use self::unify::unify;

mod calculator;
mod format;
mod rpnprint;
mod rpneval;
mod unify;
