use crate::operation::Operation::{self, *};

fn konst(c: f64) -> Operation {
    Constant(c)
}

fn squared(f: &Operation) -> Operation {
    Operation::pow(f.clone(), konst(2.0))
}

impl Operation {
    /// Symbolic d/dx. The result is a new tree, not simplified, so it mirrors
    /// the rule that produced it: d(3x) is `((0 * x) + (3 * 1))`.
    pub fn derivative(&self) -> Operation {
        match self {
            Constant(_) => konst(0.0),
            Variable => konst(1.0),
            Negate(f) => -f.derivative(),
            Addition(f, g) => f.derivative() + g.derivative(),
            Subtraction(f, g) => f.derivative() - g.derivative(),
            // product rule
            Product(f, g) => f.derivative() * *g.clone() + *f.clone() * g.derivative(),
            // quotient rule
            Division(f, g) => (f.derivative() * *g.clone() - *f.clone() * g.derivative()) / squared(g),
            // power rule: c * f^(c-1) * f', for any exponent free of x
            Pow(f, g) if g.is_constant() => {
                let c = g.evaluate(0.0);
                konst(c) * Operation::pow(*f.clone(), konst(c - 1.0)) * f.derivative()
            }
            // f^g = exp(g log f) so d(f^g) = f^g * (g' log f + g f'/f)
            Pow(f, g) => self.clone() * (
                g.derivative() * Operation::of(Log, *f.clone()) +
                *g.clone() * f.derivative() / *f.clone()),
            Sin(f) => Operation::of(Cos, *f.clone()) * f.derivative(),
            Cos(f) => -Operation::of(Sin, *f.clone()) * f.derivative(),
            Tan(f) => f.derivative() / squared(&Operation::of(Cos, *f.clone())),
            Asin(f) => f.derivative() / Operation::of(Sqrt, konst(1.0) - squared(f)),
            Acos(f) => -(f.derivative() / Operation::of(Sqrt, konst(1.0) - squared(f))),
            Atan(f) => f.derivative() / (konst(1.0) + squared(f)),
            Log(f) => f.derivative() / *f.clone(),
            Exp(f) => self.clone() * f.derivative(),
            Sqrt(f) => f.derivative() / (konst(2.0) * self.clone()),
            // sign(f) as f/|f|, undefined at f = 0
            Abs(f) => f.derivative() * (*f.clone() / self.clone()),
        }
    }
}
