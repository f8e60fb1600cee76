/*!
## Rust Machine Module

This Rust module executes BASIC programs by walking their parse trees.

The `Runtime` owns all interpreter state and performs no I/O of its own;
drivers pump it with `Runtime::execute` and service the returned `Event`.

*/

/// Location of one statement: an index into the sorted line list paired
/// with an index into that line's statements.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Address {
    pub line: usize,
    pub statement: usize,
}

mod data;
mod function;
mod operation;
mod runtime;
mod val;
mod var;

pub use data::Data;
pub use function::Function;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
