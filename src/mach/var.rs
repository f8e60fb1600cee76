use super::Val;
use crate::error;
use crate::lang::ast::Ident;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Variable memory: the scalar table and the array table. Scalars exist
/// only once assigned, arrays exist only once dimensioned, and one name
/// may live in both tables at once.
#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    arrays: HashMap<Rc<str>, Array>,
}

/// Array cells are sparse. A numeric cell reads as `0` until written; a
/// string-array cell holds a single character and reads as a space.
#[derive(Debug)]
enum Array {
    Number {
        dims: Vec<usize>,
        cells: HashMap<Vec<usize>, f64>,
    },
    Chars {
        dims: Vec<usize>,
        cells: HashMap<Vec<usize>, char>,
    },
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, ident: &Ident) -> Option<Val> {
        self.vars.get(ident.name()).cloned()
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        match (ident.is_string(), &value) {
            (true, Val::String(_)) | (false, Val::Number(_)) => {
                self.vars.insert(ident.name().clone(), value);
                Ok(())
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn has_array(&self, ident: &Ident) -> bool {
        self.arrays.contains_key(ident.name())
    }

    pub fn dimension(&mut self, ident: &Ident, sizes: Vec<Val>) -> Result<()> {
        if self.arrays.contains_key(ident.name()) {
            return Err(error!(RedimensionedArray));
        }
        let dims = Var::subscripts(sizes)?;
        let array = if ident.is_string() {
            Array::Chars {
                dims,
                cells: HashMap::new(),
            }
        } else {
            Array::Number {
                dims,
                cells: HashMap::new(),
            }
        };
        self.arrays.insert(ident.name().clone(), array);
        Ok(())
    }

    pub fn fetch_element(&self, ident: &Ident, subscripts: Vec<Val>) -> Result<Val> {
        let indices = Var::subscripts(subscripts)?;
        let array = match self.arrays.get(ident.name()) {
            Some(array) => array,
            None => return Err(error!(UndefinedVariable; ident.name().to_string())),
        };
        match array {
            Array::Number { dims, cells } => {
                Var::check_bounds(dims, &indices)?;
                Ok(Val::Number(cells.get(&indices).copied().unwrap_or(0.0)))
            }
            Array::Chars { dims, cells } => {
                Var::check_bounds(dims, &indices)?;
                let ch = cells.get(&indices).copied().unwrap_or(' ');
                Ok(Val::String(ch.to_string()))
            }
        }
    }

    pub fn store_element(&mut self, ident: &Ident, subscripts: Vec<Val>, value: Val) -> Result<()> {
        let indices = Var::subscripts(subscripts)?;
        let array = match self.arrays.get_mut(ident.name()) {
            Some(array) => array,
            None => return Err(error!(UndefinedVariable; ident.name().to_string())),
        };
        match array {
            Array::Number { dims, cells } => {
                Var::check_bounds(dims, &indices)?;
                match value {
                    Val::Number(n) => {
                        cells.insert(indices, n);
                        Ok(())
                    }
                    Val::String(_) => Err(error!(TypeMismatch)),
                }
            }
            Array::Chars { dims, cells } => {
                Var::check_bounds(dims, &indices)?;
                match value {
                    Val::String(s) => {
                        cells.insert(indices, s.chars().next().unwrap_or(' '));
                        Ok(())
                    }
                    Val::Number(_) => Err(error!(TypeMismatch)),
                }
            }
        }
    }

    /// Full contents of a one-dimensional string array, unset cells reading
    /// as spaces. Any other array kind has no whole-array reading.
    pub fn array_contents(&self, ident: &Ident) -> Result<Val> {
        let array = match self.arrays.get(ident.name()) {
            Some(array) => array,
            None => return Err(error!(UndefinedVariable; ident.name().to_string())),
        };
        match array {
            Array::Chars { dims, cells } if dims.len() == 1 => {
                let mut s = String::with_capacity(dims[0]);
                for index in 1..=dims[0] {
                    s.push(cells.get([index].as_slice()).copied().unwrap_or(' '));
                }
                Ok(Val::String(s))
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Subscripts truncate toward zero and count from one.
    fn subscripts(vals: Vec<Val>) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(vals.len());
        for val in vals {
            let n = f64::try_from(val)?.trunc();
            if n.is_nan() || n < 1.0 || n > usize::MAX as f64 {
                return Err(error!(SubscriptOutOfRange));
            }
            indices.push(n as usize);
        }
        Ok(indices)
    }

    fn check_bounds(dims: &[usize], indices: &[usize]) -> Result<()> {
        if dims.len() != indices.len() {
            return Err(error!(SubscriptOutOfRange));
        }
        for (index, dim) in indices.iter().zip(dims) {
            if index > dim {
                return Err(error!(SubscriptOutOfRange));
            }
        }
        Ok(())
    }
}
