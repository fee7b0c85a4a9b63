extern crate riemann;
mod plot;

use riemann::{Params, Rule, report};

struct Session {
    source: String,
    params: Params,
}

impl Session {
    fn new() -> Session {
        Session {
            source: "x^2".to_string(),
            params: Params {
                lower: 0.0,
                upper: 4.0,
                intervals: 10,
                rule: Rule::Left,
            },
        }
    }

    fn show(&self) {
        let r = report(&self.source, &self.params);
        if let Some(e) = &r.error {
            println!("invalid function ({}), plotting 0", e);
        }
        let p = self.params.sanitized();
        plot::draw(&r, p.lower, p.upper);
        println!(
            "∫[{}, {}] {} dx ≈ {:.4} ({}, n={})",
            p.lower, p.upper, r.function, r.estimate, r.label, p.intervals
        );
    }

    // lines are either a setting command or a new expression
    fn input(&mut self, line: &str) -> Result<(), String> {
        let mut words = line.split_whitespace();
        match words.next() {
            None => return Ok(()),
            Some("bounds") => {
                let lower = words.next().and_then(|w| w.parse().ok());
                let upper = words.next().and_then(|w| w.parse().ok());
                match (lower, upper) {
                    (Some(lower), Some(upper)) => {
                        self.params.lower = lower;
                        self.params.upper = upper;
                    }
                    _ => return Err("usage: bounds <lower> <upper>".to_string()),
                }
            }
            Some("intervals") => match words.next().and_then(|w| w.parse().ok()) {
                Some(n) => self.params.intervals = n,
                None => return Err("usage: intervals <n>".to_string()),
            },
            Some("rule") => match words.next().map(|w| w.parse()) {
                Some(Ok(rule)) => {
                    self.params.rule = rule;
                    println!("{}", self.params.rule.describe());
                }
                _ => return Err("usage: rule left|right|midpoint|trapezoidal".to_string()),
            },
            Some(_) => self.source = line.trim().to_string(),
        }
        self.show();
        Ok(())
    }
}

fn main() -> Result<(), String> {
    let mut session = Session::new();

    if std::env::args().len() > 1 {
        session.source = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        session.show();
        for rule in Rule::ALL {
            session.params.rule = rule;
            let r = report(&session.source, &session.params);
            println!("{:>20}: {:.4}", r.label, r.estimate);
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    session.show();
    loop {
        match rl.readline("∫> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                if let Err(e) = session.input(&line) {
                    println!("{}", e);
                }
            }
        }
    }
}
