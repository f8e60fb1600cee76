//! # minibasic
//!
//! A line-oriented BASIC dialect of the classroom era: numbered lines,
//! two value types, and a tree-walking interpreter.
//!
//! Programs are plain text files of numbered lines. Run one with:
//! ```text
//! minibasic program.bas
//! ```
//!
//! The library half of this crate exposes the lexer and parser in [`lang`]
//! and the runtime in [`mach`]. The binary is a thin terminal driver that
//! pumps the runtime and services its print and input events.
//!
//! Stop a running program with CTRL-C.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod __Language;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

#[path = "doc/functions.rs"]
#[allow(non_snake_case)]
pub mod ___Functions;

pub mod lang;
pub mod mach;
