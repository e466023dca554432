use std::fmt;

/// A binary operator allowed inside `<op>` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Shl,
}

impl BinaryOp {
    /// Maps the `op` attribute of an `<op>` element onto an operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "&" => Some(BinaryOp::And),
            "<<" => Some(BinaryOp::Shl),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&",
            BinaryOp::Shl => "<<",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "~" => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
        }
    }
}

/// An expression as it appears in a description document.
///
/// Only `Value` and `Bit` are needed for enumeration items in practice, but
/// list lengths and expression fields use the full set, so the tree keeps
/// every variant the protocol family defines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// `<value>N</value>`
    Value(u64),
    /// `<bit>N</bit>`, i.e. `1 << N`
    Bit(u32),
    /// `<fieldref>name</fieldref>`
    FieldRef(String),
    /// `<paramref type="T">name</paramref>`, a field of the enclosing record
    ParamRef { name: String, ty: String },
    /// `<enumref ref="Enum">Item</enumref>`
    EnumRef { enum_name: String, item: String },
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    /// `<popcount>` over a nested expression
    PopCount(Box<Expression>),
    /// `<sumof ref="list"/>`
    SumOf(String),
}

impl Expression {
    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Returns true when the expression is a plain literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Value(_) | Expression::Bit(_))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Value(v) => write!(f, "{}", v),
            Expression::Bit(b) => write!(f, "(1 << {})", b),
            Expression::FieldRef(name) | Expression::ParamRef { name, .. } => write!(f, "{}", name),
            Expression::EnumRef { enum_name, item } => write!(f, "{}::{}", enum_name, item),
            Expression::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Expression::Unary { op, operand } => write!(f, "{}{}", op.symbol(), operand),
            Expression::PopCount(inner) => write!(f, "popcount({})", inner),
            Expression::SumOf(list) => write!(f, "sumof({})", list),
        }
    }
}
