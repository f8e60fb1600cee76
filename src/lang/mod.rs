/*!
# Language Module

Lexical analysis and parsing of the BASIC dialect: tokens with source
positions, the statement and expression tree, and the line-indexed program.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod program;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use parse::parse;
pub use program::Line;
pub use program::Program;
pub use token::Token;
pub use token::TokenKind;

pub mod ast;

/// BASIC line number attached to an error, when one is known.
pub type LineNumber = Option<u16>;

/// 1-based line and column of a token in the source text.
pub type Position = (usize, usize);
