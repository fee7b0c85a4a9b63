use crate::expr::{BinOp, Expr, Func};
use crate::parser::{parse, CompileError};
use core::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum EvalError {
    DivideByZero,
    Domain(Func, f64),
    NonFinite,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::DivideByZero => write!(f, "division by zero"),
            EvalError::Domain(func, arg) => write!(f, "{} undefined at {}", func.name(), arg),
            EvalError::NonFinite => write!(f, "result is not finite"),
        }
    }
}

// overflowed or undefined results are errors so callers can drop the sample
fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

pub fn eval(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    match expr {
        // literals go through the finiteness guard too: "1e999" parses as a
        // valid token but overflows f64
        Expr::Literal(num) => finite(*num),
        Expr::Variable => Ok(x),
        Expr::Neg(inner) => Ok(-eval(inner, x)?),
        Expr::Bin(op, lhs, rhs) => {
            let l = eval(lhs, x)?;
            let r = eval(rhs, x)?;
            match op {
                BinOp::Add => finite(l + r),
                BinOp::Sub => finite(l - r),
                BinOp::Mul => finite(l * r),
                BinOp::Div if r == 0.0 => Err(EvalError::DivideByZero),
                BinOp::Div => finite(l / r),
                BinOp::Pow => finite(l.powf(r)),
            }
        }
        Expr::Call(func, arg) => apply(*func, eval(arg, x)?),
    }
}

fn apply(func: Func, arg: f64) -> Result<f64, EvalError> {
    match func {
        Func::Sin => Ok(arg.sin()),
        Func::Cos => Ok(arg.cos()),
        Func::Tan => finite(arg.tan()),
        Func::Exp => finite(arg.exp()),
        Func::Ln if arg <= 0.0 => Err(EvalError::Domain(func, arg)),
        Func::Ln => Ok(arg.ln()),
        Func::Log if arg <= 0.0 => Err(EvalError::Domain(func, arg)),
        Func::Log => Ok(arg.log10()),
        Func::Sqrt if arg < 0.0 => Err(EvalError::Domain(func, arg)),
        Func::Sqrt => Ok(arg.sqrt()),
        Func::Abs => Ok(arg.abs()),
    }
}

// A compiled expression. Recompiled whenever the source changes, never
// mutated in place.
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluator {
    ast: Expr,
}

impl Evaluator {
    pub fn compile(source: &str) -> Result<Evaluator, CompileError> {
        Ok(Evaluator {
            ast: parse(source)?,
        })
    }

    // stand-in when the caller has no valid expression
    pub fn zero() -> Evaluator {
        Evaluator {
            ast: Expr::Literal(0.0),
        }
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        eval(&self.ast, x)
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ast)
    }
}
