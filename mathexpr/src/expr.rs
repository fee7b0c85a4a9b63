use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let glyph = match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        };
        write!(f, "{}", glyph)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Log,
    Sqrt,
    Abs,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "exp" => Some(Func::Exp),
            "ln" => Some(Func::Ln),
            "log" => Some(Func::Log),
            "sqrt" => Some(Func::Sqrt),
            "abs" => Some(Func::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(f64),
    Variable,
    Neg(Box<Expr>),
    Bin(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

// Lowest number is highest precedence
fn precedence(e: &Expr) -> usize {
    match e {
        Expr::Literal(_) | Expr::Variable => 0,
        Expr::Call(_, _) => 1,
        Expr::Bin(BinOp::Pow, _, _) => 2,
        Expr::Neg(_) => 3,
        Expr::Bin(BinOp::Mul, _, _) | Expr::Bin(BinOp::Div, _, _) => 4,
        Expr::Bin(BinOp::Add, _, _) | Expr::Bin(BinOp::Sub, _, _) => 5,
    }
}

fn wrap(parent: &Expr, arg: &Expr, wrap_ties: bool) -> String {
    if precedence(arg) > precedence(parent) || (wrap_ties && precedence(arg) == precedence(parent))
    {
        format!("({})", arg)
    } else {
        arg.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(num) => write!(f, "{}", num),
            Expr::Variable => write!(f, "x"),
            Expr::Neg(inner) => write!(f, "-{}", wrap(self, inner, true)),
            Expr::Bin(op, lhs, rhs) => {
                // '-' and '/' don't associate so rhs ties get parenthesized,
                // '^' associates to the right so lhs ties do instead
                let (lhs_ties, rhs_ties) = match op {
                    BinOp::Pow => (true, false),
                    BinOp::Sub | BinOp::Div => (false, true),
                    BinOp::Add | BinOp::Mul => (false, false),
                };
                write!(
                    f,
                    "{} {} {}",
                    wrap(self, lhs, lhs_ties),
                    op,
                    wrap(self, rhs, rhs_ties)
                )
            }
            Expr::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
        }
    }
}
