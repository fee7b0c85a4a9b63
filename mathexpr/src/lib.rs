#![deny(warnings)]

mod scanner;
mod tokenizer;

mod expr;
pub use expr::{BinOp, Expr, Func};

mod parser;
pub use parser::{parse, CompileError};

mod eval;
pub use eval::{eval, EvalError, Evaluator};
