use super::{Error, Position};
use crate::error;
use std::convert::TryFrom;

/// One lexeme of source text with its kind and 1-based position.
/// Immutable once produced.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new<S: Into<String>>(lexeme: S, kind: TokenKind, line: usize, column: usize) -> Token {
        Token {
            lexeme: lexeme.into(),
            kind,
            line,
            column,
        }
    }

    pub fn position(&self) -> Position {
        (self.line, self.column)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.lexeme),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

/// A program line number must be an unsigned integer literal in `0..=65535`.
impl TryFrom<&Token> for u16 {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if token.kind == TokenKind::Number && token.lexeme.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(line) = token.lexeme.parse::<u16>() {
                return Ok(line);
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    String,
    Var,
    SVar,
    Print,
    If,
    Then,
    Let,
    Dim,
    Input,
    For,
    To,
    Step,
    Next,
    Go,
    Sub,
    Return,
    Stop,
    Rem,
    Data,
    Read,
    Restore,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Newline,
    Eof,
}

impl TokenKind {
    /// Reserved words are matched exactly; BASIC keywords are upper-case.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        use TokenKind::*;
        match s {
            "PRINT" => Some(Print),
            "IF" => Some(If),
            "THEN" => Some(Then),
            "LET" => Some(Let),
            "DIM" => Some(Dim),
            "INPUT" => Some(Input),
            "FOR" => Some(For),
            "TO" => Some(To),
            "STEP" => Some(Step),
            "NEXT" => Some(Next),
            "GO" => Some(Go),
            "SUB" => Some(Sub),
            "RETURN" => Some(Return),
            "STOP" => Some(Stop),
            "REM" => Some(Rem),
            "DATA" => Some(Data),
            "READ" => Some(Read),
            "RESTORE" => Some(Restore),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Number => write!(f, "NUMBER"),
            String => write!(f, "STRING"),
            Var => write!(f, "VARIABLE"),
            SVar => write!(f, "STRING VARIABLE"),
            Print => write!(f, "PRINT"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            Let => write!(f, "LET"),
            Dim => write!(f, "DIM"),
            Input => write!(f, "INPUT"),
            For => write!(f, "FOR"),
            To => write!(f, "TO"),
            Step => write!(f, "STEP"),
            Next => write!(f, "NEXT"),
            Go => write!(f, "GO"),
            Sub => write!(f, "SUB"),
            Return => write!(f, "RETURN"),
            Stop => write!(f, "STOP"),
            Rem => write!(f, "REM"),
            Data => write!(f, "DATA"),
            Read => write!(f, "READ"),
            Restore => write!(f, "RESTORE"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            Newline => write!(f, "end of line"),
            Eof => write!(f, "end of input"),
        }
    }
}
