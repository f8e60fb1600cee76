use super::Val;
use crate::error;
use crate::lang::ast::Relop;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// The arithmetic and comparison kernel. Every method takes evaluated
/// operands and enforces the tag rules: `+` adds numbers or concatenates
/// strings, the other operators are numeric only, and comparisons require
/// matching tags.
pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(lhs), Number(rhs)) => Ok(Number(lhs + rhs)),
            (String(lhs), String(rhs)) => Ok(String(lhs + &rhs)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(lhs), Number(rhs)) => Ok(Number(lhs - rhs)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(lhs), Number(rhs)) => Ok(Number(lhs * rhs)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(_), Number(rhs)) if rhs == 0.0 => Err(error!(DivisionByZero)),
            (Number(lhs), Number(rhs)) => Ok(Number(lhs / rhs)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Number(val) => Ok(Number(-val)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Strings compare lexicographically; numbers numerically.
    pub fn compare(relop: Relop, lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        let ordering = match (&lhs, &rhs) {
            (Number(lhs), Number(rhs)) => match lhs.partial_cmp(rhs) {
                Some(ordering) => ordering,
                None => return Ok(relop == Relop::NotEqual),
            },
            (String(lhs), String(rhs)) => lhs.cmp(rhs),
            _ => return Err(error!(TypeMismatch)),
        };
        Ok(match relop {
            Relop::Equal => ordering == Ordering::Equal,
            Relop::NotEqual => ordering != Ordering::Equal,
            Relop::Less => ordering == Ordering::Less,
            Relop::LessEqual => ordering != Ordering::Greater,
            Relop::Greater => ordering == Ordering::Greater,
            Relop::GreaterEqual => ordering != Ordering::Less,
        })
    }
}
