use crate::error;
use crate::lang::ast::Literal;
use crate::lang::Error;

/// A runtime value. Arithmetic and comparison dispatch on the tag and fail
/// when operand tags mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

/// Numeric display drops the fractional part of mathematically integral
/// values; `5.0` prints as `5`.
impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&Literal> for Val {
    fn from(literal: &Literal) -> Val {
        match literal {
            Literal::Number(n) => Val::Number(*n),
            Literal::String(s) => Val::String(s.to_string()),
        }
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> Result<f64, Error> {
        match val {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}
