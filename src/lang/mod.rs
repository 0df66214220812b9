/*!
# Rust Language Module

This Rust module provides lexical analysis and expression parsing of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse_expression;
pub use token::{Associativity, Positioned, Token};
