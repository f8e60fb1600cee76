use super::Val;
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Program};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// The DATA pool. Every literal in the program is collected up front, in
/// line order, into one flat queue that READ consumes left to right.
#[derive(Debug, Default)]
pub struct Data {
    vals: Vec<Val>,
    line_offsets: BTreeMap<u16, usize>,
    cursor: usize,
}

impl Data {
    pub fn scan(program: &Program) -> Data {
        let mut vals: Vec<Val> = Vec::new();
        let mut line_offsets = BTreeMap::new();
        for line in program.lines() {
            for statement in &line.statements {
                if let Statement::Data(literals) = statement {
                    line_offsets.entry(line.number).or_insert_with(|| vals.len());
                    for literal in literals {
                        vals.push(Val::from(literal));
                    }
                }
            }
        }
        Data {
            vals,
            line_offsets,
            cursor: 0,
        }
    }

    pub fn read(&mut self) -> Result<Val> {
        match self.vals.get(self.cursor) {
            Some(val) => {
                self.cursor += 1;
                Ok(val.clone())
            }
            None => Err(error!(OutOfData)),
        }
    }

    /// Rewind to the start, or to the first DATA line at or past the given
    /// line number.
    pub fn restore(&mut self, line_number: Option<u16>) -> Result<()> {
        match line_number {
            None => {
                self.cursor = 0;
                Ok(())
            }
            Some(target) => match self.line_offsets.range(target..).next() {
                Some((_, offset)) => {
                    self.cursor = *offset;
                    Ok(())
                }
                None => Err(error!(UndefinedLine)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::parse;
    use crate::lang::ErrorCode;

    fn pool(source: &str) -> Data {
        Data::scan(&parse(source).unwrap())
    }

    #[test]
    fn test_reads_in_line_order() {
        let mut data = pool("30 DATA 3\n10 DATA 1,2\n20 PRINT\n");
        assert_eq!(data.read().unwrap(), Val::Number(1.0));
        assert_eq!(data.read().unwrap(), Val::Number(2.0));
        assert_eq!(data.read().unwrap(), Val::Number(3.0));
        let error = data.read().unwrap_err();
        assert_eq!(error.code(), ErrorCode::OutOfData);
    }

    #[test]
    fn test_restore_rewinds_to_start() {
        let mut data = pool("10 DATA 1,2\n");
        data.read().unwrap();
        data.read().unwrap();
        data.restore(None).unwrap();
        assert_eq!(data.read().unwrap(), Val::Number(1.0));
    }

    #[test]
    fn test_restore_seeks_next_data_line() {
        let mut data = pool("10 DATA 1\n20 PRINT\n30 DATA 2\n");
        data.restore(Some(15)).unwrap();
        assert_eq!(data.read().unwrap(), Val::Number(2.0));
        data.restore(Some(30)).unwrap();
        assert_eq!(data.read().unwrap(), Val::Number(2.0));
        let error = data.restore(Some(31)).unwrap_err();
        assert_eq!(error.code(), ErrorCode::UndefinedLine);
    }

    #[test]
    fn test_mixed_literals() {
        let mut data = pool("10 DATA 1.5,\"TWO\"\n");
        assert_eq!(data.read().unwrap(), Val::Number(1.5));
        assert_eq!(data.read().unwrap(), Val::String("TWO".to_string()));
    }
}
