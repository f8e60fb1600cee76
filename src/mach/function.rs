use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// The built-in function table. `RND` draws from generator state owned by
/// the runtime; everything here is pure.
pub struct Function {}

impl Function {
    pub fn arity(name: &str) -> Option<std::ops::RangeInclusive<usize>> {
        match name {
            "ABS" | "INT" | "LEN" | "RND" | "SGN" | "SQR" => Some(1..=1),
            _ => None,
        }
    }

    pub fn abs(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.abs()))
    }

    /// Floor, not truncation; `INT(-1.5)` is `-2`.
    pub fn int(val: Val) -> Result<Val> {
        Ok(Val::Number(f64::try_from(val)?.floor()))
    }

    pub fn len(val: Val) -> Result<Val> {
        match val {
            Val::String(s) => Ok(Val::Number(s.chars().count() as f64)),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sgn(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        let sign = if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        };
        Ok(Val::Number(sign))
    }

    pub fn sqr(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        if n < 0.0 {
            return Err(error!(IllegalFunctionCall; "NEGATIVE SQUARE ROOT"));
        }
        Ok(Val::Number(n.sqrt()))
    }
}
