use std::env;

use anyhow::Context;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod repl {
    use anyhow::{anyhow, Context};
    use shunting::Calculator;
    use symbolic::Operation;

    #[derive(Debug, PartialEq)]
    pub enum Command<'a> {
        Rpn(Vec<&'a str>),
        Derive(&'a str),
        EvalAt(&'a str, &'a str),
        Eval(&'a str),
    }

    impl<'a> Command<'a> {
        pub fn parse(line: &'a str) -> Command<'a> {
            let line = line.trim();
            if let Some(keys) = line.strip_prefix(":rpn") {
                Command::Rpn(keys.split_whitespace().collect())
            } else if let Some(expr) = line.strip_prefix(":d") {
                Command::Derive(expr.trim())
            } else if let Some((expr, at)) = line.rsplit_once('@') {
                Command::EvalAt(expr.trim(), at.trim())
            } else {
                Command::Eval(line)
            }
        }
    }

    pub fn run(calc: &Calculator, line: &str) -> anyhow::Result<String> {
        match Command::parse(line) {
            Command::Rpn(keys) => Ok(calc.calculate_and_format(&keys[..])?),
            Command::Derive(expr) => {
                let op: Operation = expr.parse()?;
                Ok(op.derivative().to_string())
            }
            Command::EvalAt(expr, at) => {
                let x: f64 = at.parse()
                    .with_context(|| format!("bad value for x: {:?}", at))?;
                let op: Operation = expr.parse()?;
                Ok(calc.formatter.format(op.evaluate(x)))
            }
            Command::Eval(expr) if expr.is_empty() => Err(anyhow!("nothing to evaluate")),
            Command::Eval(expr) => {
                let op: Operation = expr.parse()?;
                Ok(calc.formatter.format(op.evaluate(0.0)))
            }
        }
    }

}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let calc = shunting::Calculator::new();

    if env::args().len() > 1 {
        let input = env::args().skip(1).collect::<Vec<String>>().join(" ");
        println!("{}", repl::run(&calc, &input)?);
        return Ok(());
    }

    let histpath = home::home_dir()
        .map(|h| h.join(".tox_history"))
        .context("can't find a home directory for the history file")?;
    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&histpath).is_err() {
        println!("No history yet");
    }
    loop {
        match rl.readline(">> ") {
            Ok(input) => {
                rl.add_history_entry(input.as_str())?;
                match repl::run(&calc, &input) {
                    Ok(result) => println!("{}", result),
                    Err(e) => println!("{:#}", e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    debug!("saving history to {:?}", histpath);
    rl.save_history(&histpath)?;
    Ok(())
}
