use log::debug;

use crate::errors::Result;
use crate::format::NumberFormatter;
use crate::parser::ShuntingParser;
use crate::rpneval::MathContext;
use crate::unify::unify;

/// Keypress pipeline: unify, shunting-yard, evaluate.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    pub context: MathContext,
    pub formatter: NumberFormatter,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate<S: AsRef<str>>(&self, input: &[S]) -> Result<f64> {
        let rpn = ShuntingParser::parse(unify(input)?)?;
        let result = self.context.eval(&rpn)?;
        debug!("{} = {}", rpn, result);
        Ok(result)
    }

    pub fn calculate_and_format<S: AsRef<str>>(&self, input: &[S]) -> Result<String> {
        self.calculate(input).map(|result| self.formatter.format(result))
    }
}

#[cfg(test)]
mod tests {
    use super::Calculator;
    use crate::CalcError;

    #[test]
    fn calculate() {
        let calc = Calculator::new();
        assert_eq!(calc.calculate(&["3", "+", "4", "*", "2"]), Ok(11.0));
        assert_eq!(calc.calculate(&["1", "0", "÷", "4"]), Ok(2.5));
        assert_eq!(calc.calculate(&["(", "1", "+", "2"]), Err(CalcError::ParenthesisMismatch));
    }

    #[test]
    fn calculate_and_format() {
        let calc = Calculator::new();
        assert_eq!(calc.calculate_and_format(&["1", "÷", "3"]), Ok(format!("0.3333333333")));
        assert_eq!(calc.calculate_and_format(&["1", "÷", "0"]), Ok(format!("Infinity")));
        assert!(calc.calculate_and_format(&["1", ".", ".", "2"]).unwrap_err().is_syntax_error());
    }

    #[test]
    fn graphing_variable() {
        let mut calc = Calculator::new();
        calc.context.setvar("x", 4.0);
        assert_eq!(calc.calculate(&["√", "x", "+", "x", "x²"]), Ok(18.0));
    }
}
