//! # Line-numbered BASIC
//!
//! A small BASIC in the spirit of the earliest interpreters. Every line
//! carries a line number and the program runs in line number order
//! until a `GOTO` or a taken `IF ... THEN` sends it elsewhere.
//!
//! ```text
//! 10 REM COUNT TO THREE
//! 20 LET X = 0
//! 30 PRINT X
//! 40 LET X = X + 1
//! 50 IF X < 3 THEN 30
//! ```
//!
//! Tokens are separated by whitespace. Keywords are upper case.
//! Values are integers, strings or the booleans produced by comparisons.
//!
//! Embedding the interpreter only needs a [`mach::Console`]:
//! ```
//! use basic::mach::{Console, Program, Runtime, Val};
//!
//! struct Out(Vec<String>);
//!
//! impl Console for Out {
//!     fn write(&mut self, val: &Val) {
//!         self.0.push(val.to_string());
//!     }
//!     fn read_line(&mut self) -> String {
//!         String::new()
//!     }
//! }
//!
//! let program = Program::from_source(&["20 PRINT X * 2", "10 LET X = 21"]).unwrap();
//! let mut out = Out(vec![]);
//! Runtime::new(program).run(&mut out).unwrap();
//! assert_eq!(out.0, vec!["42"]);
//! ```

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
