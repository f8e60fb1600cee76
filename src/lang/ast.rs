use std::rc::Rc;

/// Variable name. String identifiers keep their `$` sigil and are a single
/// letter; numeric identifiers may be any length.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Plain(s) => s,
            Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

/// An assignable storage location: a scalar or one array element.
#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Scalar(Ident),
    Element(Ident, Vec<Expression>),
}

impl Variable {
    pub fn ident(&self) -> &Ident {
        match self {
            Variable::Scalar(ident) => ident,
            Variable::Element(ident, _) => ident,
        }
    }
}

/// Subscript or substring access attached to a primary.
#[derive(Debug, PartialEq, Clone)]
pub enum Qualifier {
    Index(Vec<Expression>),
    Slice(Option<Box<Expression>>, Option<Box<Expression>>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    String(Rc<str>, Option<Qualifier>),
    Var(Ident, Option<Qualifier>),
    Negate(Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Relop {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// Comparisons exist only as the condition of an IF statement; they are not
/// expressions and produce no value.
#[derive(Debug, PartialEq, Clone)]
pub struct Comparison {
    pub lhs: Expression,
    pub relop: Relop,
    pub rhs: Expression,
}

/// A literal in a DATA statement, typed at parse time.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(Rc<str>),
}

/// One PRINT item. A trailing semicolon glues the item to whatever follows;
/// otherwise the item ends its own output line.
#[derive(Debug, PartialEq, Clone)]
pub struct PrintItem {
    pub expr: Expression,
    pub semicolon: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Data(Vec<Literal>),
    Dim(Ident, Vec<Expression>),
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(Expression),
    Goto(Expression),
    If(Comparison, Box<Statement>),
    Input(Option<Rc<str>>, Vec<Variable>),
    Let(Variable, Expression),
    Next(Ident),
    Print(Vec<PrintItem>),
    Read(Vec<Variable>),
    Rem,
    Restore(Option<u16>),
    Return,
    Stop,
}

fn write_join<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter,
    items: &[T],
    sep: &str,
) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variable::Scalar(ident) => write!(f, "{}", ident),
            Variable::Element(ident, subscripts) => {
                write!(f, "{}(", ident)?;
                write_join(f, subscripts, ",")?;
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Qualifier::Index(subscripts) => {
                write!(f, "(")?;
                write_join(f, subscripts, ",")?;
                write!(f, ")")
            }
            Qualifier::Slice(Some(start), Some(finish)) => {
                write!(f, "({} TO {})", start, finish)
            }
            Qualifier::Slice(Some(start), None) => write!(f, "({} TO)", start),
            Qualifier::Slice(None, Some(finish)) => write!(f, "(TO {})", finish),
            Qualifier::Slice(None, None) => write!(f, "(TO)"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s, qualifier) => {
                write!(f, "\"{}\"", s)?;
                match qualifier {
                    Some(q) => write!(f, "{}", q),
                    None => Ok(()),
                }
            }
            Var(ident, qualifier) => {
                write!(f, "{}", ident)?;
                match qualifier {
                    Some(q) => write!(f, "{}", q),
                    None => Ok(()),
                }
            }
            Negate(expr) => write!(f, "-{}", expr),
            Add(lhs, rhs) => write!(f, "{}+{}", lhs, rhs),
            Subtract(lhs, rhs) => write!(f, "{}-{}", lhs, rhs),
            Multiply(lhs, rhs) => write!(f, "{}*{}", lhs, rhs),
            Divide(lhs, rhs) => write!(f, "{}/{}", lhs, rhs),
        }
    }
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relop::*;
        let s = match self {
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.relop, self.rhs)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Data(literals) => {
                write!(f, "DATA ")?;
                write_join(f, literals, ",")
            }
            Dim(ident, sizes) => {
                write!(f, "DIM {}(", ident)?;
                write_join(f, sizes, ",")?;
                write!(f, ")")
            }
            For(ident, from, to, step) => {
                write!(f, "FOR {}={} TO {}", ident, from, to)?;
                match step {
                    Some(step) => write!(f, " STEP {}", step),
                    None => Ok(()),
                }
            }
            Gosub(expr) => write!(f, "GO SUB {}", expr),
            Goto(expr) => write!(f, "GO TO {}", expr),
            If(comparison, then) => write!(f, "IF {} THEN {}", comparison, then),
            Input(prompt, variables) => {
                write!(f, "INPUT ")?;
                if let Some(prompt) = prompt {
                    write!(f, "\"{}\";", prompt)?;
                }
                write_join(f, variables, ",")
            }
            Let(variable, expr) => write!(f, "LET {}={}", variable, expr),
            Next(ident) => write!(f, "NEXT {}", ident),
            Print(items) => {
                write!(f, "PRINT")?;
                for (i, item) in items.iter().enumerate() {
                    if i == 0 {
                        write!(f, " {}", item.expr)?;
                    } else {
                        write!(f, "{}", item.expr)?;
                    }
                    if item.semicolon {
                        write!(f, ";")?;
                    } else if i + 1 < items.len() {
                        write!(f, ",")?;
                    }
                }
                Ok(())
            }
            Read(variables) => {
                write!(f, "READ ")?;
                write_join(f, variables, ",")
            }
            Rem => write!(f, "REM"),
            Restore(line_number) => match line_number {
                Some(n) => write!(f, "RESTORE {}", n),
                None => write!(f, "RESTORE"),
            },
            Return => write!(f, "RETURN"),
            Stop => write!(f, "STOP"),
        }
    }
}
