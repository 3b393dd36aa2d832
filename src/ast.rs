use crate::interpreter::value::Value;

/// Represents a literal value in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `3` or `2.5`.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Guards, printed values, assigned values and file names are all parsed into
/// an `Expr` once and then evaluated against the variable environment, as
/// often as the surrounding construct requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Returns the source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `!x` or `not x`
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// Operators that take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    And,
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{symbol}")
    }
}

/// A statement that needs no block: everything except `if`, `else`, `while`
/// and `for`.
///
/// Both block styles parse these the same way and differ only in how the
/// statement is terminated (`;` or the end of the line).
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = value`
    Assignment {
        /// Target variable.
        name:  String,
        /// Assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr`
    Print {
        /// Printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `input name`
    Input {
        /// Variable that receives the line read from standard input.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `file_read filename [to] name`
    FileRead {
        /// Expression naming the file.
        filename: Expr,
        /// Variable that receives the file contents.
        name:     String,
        /// Line number in the source code.
        line:     usize,
    },
    /// `file_write filename [to] content`
    FileWrite {
        /// Expression naming the file.
        filename: Expr,
        /// Expression whose text is written.
        content:  Expr,
        /// Line number in the source code.
        line:     usize,
    },
}
