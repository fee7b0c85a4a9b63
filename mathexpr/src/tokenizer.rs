use crate::expr::{BinOp, Func};
use crate::scanner::{self, Scanner};

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Unknown(String),
    Number(f64),
    Variable,
    Function(Func),
    BOp(BinOp),
    Neg, // unary minus
    OParen,
    CParen,
}

pub struct Tokenizer {
    src: Scanner,
    prev: Option<Token>,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        Tokenizer {
            src: Scanner::new(source),
            prev: None,
        }
    }

    // when would a minus be unary? we need to know the prev token
    fn makes_unary(prev: &Option<Token>) -> bool {
        !matches!(
            prev,
            Some(Token::Number(_)) | Some(Token::Variable) | Some(Token::CParen)
        )
    }

    fn get_token(&mut self) -> Option<Token> {
        self.src.ignore_ws(); // whitespace is insignificant
        if let Some(op) = self.src.accept("+-*/^()") {
            self.src.ignore();
            return Some(match op {
                '(' => Token::OParen,
                ')' => Token::CParen,
                '-' if Self::makes_unary(&self.prev) => Token::Neg,
                '+' => Token::BOp(BinOp::Add),
                '-' => Token::BOp(BinOp::Sub),
                '*' => Token::BOp(BinOp::Mul),
                '/' => Token::BOp(BinOp::Div),
                _ => Token::BOp(BinOp::Pow),
            });
        }
        if let Some(id) = scanner::scan_identifier(&mut self.src) {
            return Some(match id.as_str() {
                "x" => Token::Variable,
                name => match Func::from_name(name) {
                    Some(func) => Token::Function(func),
                    None => Token::Unknown(id),
                },
            });
        }
        if let Some(num) = scanner::scan_number(&mut self.src) {
            use std::str::FromStr;
            return Some(Token::Number(f64::from_str(&num).unwrap()));
        }
        if self.src.next().is_some() {
            return Some(Token::Unknown(self.src.extract()));
        }
        None
    }
}

impl Iterator for Tokenizer {
    type Item = Token;
    fn next(&mut self) -> Option<Token> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BinOp, Func, Token, Tokenizer};

    #[test]
    fn basic_ops() {
        let mut lx = Tokenizer::new("3+4*2/-(1-5)^2^3");
        let expect = [
            Token::Number(3.0),
            Token::BOp(BinOp::Add),
            Token::Number(4.0),
            Token::BOp(BinOp::Mul),
            Token::Number(2.0),
            Token::BOp(BinOp::Div),
            Token::Neg,
            Token::OParen,
            Token::Number(1.0),
            Token::BOp(BinOp::Sub),
            Token::Number(5.0),
            Token::CParen,
            Token::BOp(BinOp::Pow),
            Token::Number(2.0),
            Token::BOp(BinOp::Pow),
            Token::Number(3.0),
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn functions_and_variables() {
        let mut lx = Tokenizer::new("3.4e-2 * sin(x) / sqrt(abs(x))");
        let expect = [
            Token::Number(3.4e-2),
            Token::BOp(BinOp::Mul),
            Token::Function(Func::Sin),
            Token::OParen,
            Token::Variable,
            Token::CParen,
            Token::BOp(BinOp::Div),
            Token::Function(Func::Sqrt),
            Token::OParen,
            Token::Function(Func::Abs),
            Token::OParen,
            Token::Variable,
            Token::CParen,
            Token::CParen,
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn unary_minus() {
        let mut lx = Tokenizer::new("x--2^-3");
        let expect = [
            Token::Variable,
            Token::BOp(BinOp::Sub),
            Token::Neg,
            Token::Number(2.0),
            Token::BOp(BinOp::Pow),
            Token::Neg,
            Token::Number(3.0),
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn unknown_lexemes() {
        let mut lx = Tokenizer::new("foo(x) $");
        assert_eq!(lx.next(), Some(Token::Unknown("foo".to_string())));
        assert_eq!(lx.next(), Some(Token::OParen));
        assert_eq!(lx.next(), Some(Token::Variable));
        assert_eq!(lx.next(), Some(Token::CParen));
        assert_eq!(lx.next(), Some(Token::Unknown("$".to_string())));
        assert_eq!(lx.next(), None);
    }
}
