/// Renders results for a calculator display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFormatter {
    /// More integer digits than this switch to scientific notation.
    pub max_int_digits: usize,
    /// Decimals kept after rounding.
    pub max_dec_digits: usize,
    /// Non-zero magnitudes below `10^-decimal_threshold` go scientific too.
    pub decimal_threshold: i32,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter { max_int_digits: 10, max_dec_digits: 10, decimal_threshold: 5 }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl NumberFormatter {
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        let magnitude = value.abs();
        let int_digits = if magnitude < 1.0 { 1 } else { magnitude.log10().floor() as usize + 1 };
        let tiny = magnitude != 0.0 && magnitude < 10f64.powi(-self.decimal_threshold);
        if int_digits > self.max_int_digits || tiny {
            return self.scientific(value);
        }
        let fixed = format!("{:.*}", self.max_dec_digits, value);
        match trim_zeros(&fixed) {
            "-0" => "0".to_string(),
            s => s.to_string(),
        }
    }

    fn scientific(&self, value: f64) -> String {
        let sci = format!("{:.*e}", self.max_dec_digits, value);
        match sci.split_once('e') {
            Some((mantissa, exp)) => format!("{}E{}", trim_zeros(mantissa), exp),
            None => sci,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumberFormatter;

    #[test]
    fn plain_numbers() {
        let fmt = NumberFormatter::default();
        assert_eq!(fmt.format(11.0), "11");
        assert_eq!(fmt.format(-0.5), "-0.5");
        assert_eq!(fmt.format(0.0), "0");
        assert_eq!(fmt.format(-0.0), "0");
        assert_eq!(fmt.format(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt.format(2.0 / 3.0), "0.6666666667");
        assert_eq!(fmt.format(0.1 + 0.2), "0.3");
        assert_eq!(fmt.format(9999999999.0), "9999999999");
    }

    #[test]
    fn scientific_numbers() {
        let fmt = NumberFormatter::default();
        assert_eq!(fmt.format(12345678901.0), "1.2345678901E10");
        assert_eq!(fmt.format(-2e15), "-2E15");
        assert_eq!(fmt.format(0.0000012), "1.2E-6");
        assert_eq!(fmt.format(0.00002), "0.00002");
    }

    #[test]
    fn custom_limits() {
        let fmt = NumberFormatter { max_int_digits: 3, max_dec_digits: 2, decimal_threshold: 2 };
        assert_eq!(fmt.format(3.14159), "3.14");
        assert_eq!(fmt.format(1234.0), "1.23E3");
        assert_eq!(fmt.format(0.005), "5E-3");
    }

    #[test]
    fn non_finite() {
        let fmt = NumberFormatter::default();
        assert_eq!(fmt.format(f64::NAN), "NaN");
        assert_eq!(fmt.format(1.0 / 0.0), "Infinity");
        assert_eq!(fmt.format(-1.0 / 0.0), "-Infinity");
    }
}
