use super::ast::Statement;
use super::Error;
use crate::error;

/// One numbered source line holding its colon-chained statements in order.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    pub number: u16,
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ", self.number)?;
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// The parsed program: lines held sorted ascending by line number.
/// Immutable once parsing completes.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Insert a line in number order. Line numbers are unique.
    pub fn insert(&mut self, line: Line) -> Result<(), Error> {
        match self.lines.binary_search_by_key(&line.number, |l| l.number) {
            Ok(_) => Err(error!(SyntaxError; "DUPLICATE LINE NUMBER")),
            Err(index) => {
                self.lines.insert(index, line);
                Ok(())
            }
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line whose number is not below the target.
    /// GO TO and GO SUB resolve their destinations with this rule.
    pub fn line_index_for(&self, target: f64) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| f64::from(line.number) >= target)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
