#![deny(warnings)]

use crate::scanner::Scanner;

static MATH_OPS: &[char] = &['+', '-', '*', '/', '%', '^', '(', ')'];

fn is_digit(c: &char) -> bool { c.is_ascii_digit() }
fn starts_identifier(c: &char) -> bool { c.is_ascii_alphabetic() || *c == '_' }
fn continues_identifier(c: &char) -> bool { c.is_ascii_alphanumeric() || *c == '_' }


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard any leading whitespace, returns if something was skipped.
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_matching(char::is_ascii_whitespace);
        self.ignore();
        skipped
    }

    // scan unsigned numbers like [0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?
    // a leading '-' is always an operator for the calculator
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_matching(is_digit) {
            return None;
        }
        // a point not followed by digits isn't part of the number
        let mark = self.checkpoint();
        if self.accept(&'.').is_some() && !self.skip_matching(is_digit) {
            self.restore(mark);
            return Some(self.extract_string());
        }
        // same for an exponent marker without digits, eg: the 'e' in '2exp(x)'
        let mark = self.checkpoint();
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']);
            if !self.skip_matching(is_digit) {
                self.restore(mark);
            }
        }
        Some(self.extract_string())
    }

    /// Consume whatever digits and points follow a number that was cut short,
    /// eg: the '.3' trailing in '1.2.3'. Returns the whole bad literal.
    pub fn scan_number_tail(&mut self, head: &str) -> Option<String> {
        if self.peek() != Some('.') {
            return None;
        }
        self.skip_matching(|c| is_digit(c) || *c == '.');
        Some(format!("{}{}", head, self.extract_string()))
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(MATH_OPS)?;
        Some(self.extract_string())
    }

    // identifiers are [a-zA-Z_][a-zA-Z0-9_]*
    pub fn scan_identifier(&mut self) -> Option<String> {
        self.accept_if(starts_identifier)?;
        self.skip_matching(continues_identifier);
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
