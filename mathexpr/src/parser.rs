use crate::expr::{BinOp, Expr};
use crate::tokenizer::{Token, Tokenizer};
use core::fmt;
use std::iter::Peekable;

#[derive(Clone, PartialEq, Debug)]
pub enum CompileError {
    EmptyExpression,
    BadToken(String),
    MissingCloseParen,
    MissingArgument(&'static str),
    Unexpected(String),
    UnexpectedEnd,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompileError::EmptyExpression => write!(f, "empty expression"),
            CompileError::BadToken(lexeme) => write!(f, "bad token: {}", lexeme),
            CompileError::MissingCloseParen => write!(f, "missing closing paren"),
            CompileError::MissingArgument(func) => {
                write!(f, "{} needs a parenthesized argument", func)
            }
            CompileError::Unexpected(what) => write!(f, "unexpected {}", what),
            CompileError::UnexpectedEnd => write!(f, "unexpected end of expression"),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(num) => format!("number {}", num),
        Token::Variable => "variable x".to_string(),
        Token::Function(func) => format!("function {}", func.name()),
        Token::BOp(op) => format!("operator {}", op),
        Token::Neg => "operator -".to_string(),
        Token::OParen => "(".to_string(),
        Token::CParen => ")".to_string(),
        Token::Unknown(lexeme) => lexeme.clone(),
    }
}

pub fn parse(source: &str) -> Result<Expr, CompileError> {
    let mut parser = Parser {
        tokens: Tokenizer::new(source).peekable(),
    };
    if parser.tokens.peek().is_none() {
        return Err(CompileError::EmptyExpression);
    }
    let expr = parser.sum()?;
    // anything left over means the grammar didn't cover the whole input
    match parser.tokens.next() {
        None => Ok(expr),
        Some(Token::Unknown(lexeme)) => Err(CompileError::BadToken(lexeme)),
        Some(token) => Err(CompileError::Unexpected(describe(&token))),
    }
}

struct Parser {
    tokens: Peekable<Tokenizer>,
}

impl Parser {
    // sum := product (('+'|'-') product)*
    fn sum(&mut self) -> Result<Expr, CompileError> {
        let mut lhs = self.product()?;
        while let Some(&Token::BOp(op @ (BinOp::Add | BinOp::Sub))) = self.tokens.peek() {
            self.tokens.next();
            let rhs = self.product()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // product := sign (('*'|'/') sign)*
    fn product(&mut self) -> Result<Expr, CompileError> {
        let mut lhs = self.sign()?;
        while let Some(&Token::BOp(op @ (BinOp::Mul | BinOp::Div))) = self.tokens.peek() {
            self.tokens.next();
            let rhs = self.sign()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // sign := '-' sign | power
    // negation binds looser than '^' so -2^3 is -(2^3)
    fn sign(&mut self) -> Result<Expr, CompileError> {
        if let Some(Token::Neg) = self.tokens.peek() {
            self.tokens.next();
            return Ok(Expr::Neg(Box::new(self.sign()?)));
        }
        self.power()
    }

    // power := primary ('^' sign)?
    // right associative, and the exponent may carry its own sign: 2^-3
    fn power(&mut self) -> Result<Expr, CompileError> {
        let base = self.primary()?;
        if let Some(Token::BOp(BinOp::Pow)) = self.tokens.peek() {
            self.tokens.next();
            let exponent = self.sign()?;
            return Ok(Expr::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    // primary := number | 'x' | '(' sum ')' | func '(' sum ')'
    fn primary(&mut self) -> Result<Expr, CompileError> {
        match self.tokens.next() {
            Some(Token::Number(num)) => Ok(Expr::Literal(num)),
            Some(Token::Variable) => Ok(Expr::Variable),
            Some(Token::OParen) => {
                let inner = self.sum()?;
                match self.tokens.next() {
                    Some(Token::CParen) => Ok(inner),
                    _ => Err(CompileError::MissingCloseParen),
                }
            }
            Some(Token::Function(func)) => {
                if self.tokens.next() != Some(Token::OParen) {
                    return Err(CompileError::MissingArgument(func.name()));
                }
                let arg = self.sum()?;
                match self.tokens.next() {
                    Some(Token::CParen) => Ok(Expr::Call(func, Box::new(arg))),
                    _ => Err(CompileError::MissingCloseParen),
                }
            }
            Some(Token::Unknown(lexeme)) => Err(CompileError::BadToken(lexeme)),
            Some(token) => Err(CompileError::Unexpected(describe(&token))),
            None => Err(CompileError::UnexpectedEnd),
        }
    }
}
