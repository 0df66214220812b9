/*!
## Rust Machine Module

This Rust module evaluates expressions and executes BASIC programs.

*/

mod eval;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use eval::evaluate;
pub use operation::Operation;
pub use program::Program;
pub use runtime::step;
pub use runtime::Console;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
