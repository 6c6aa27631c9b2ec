//! Frontend: scanner, parser, symbol table, and the value-type algebra.
//!
//! ## Language overview
//!
//! AMPL-2023 is a small statically-typed imperative language:
//!
//! ```text
//! program fib:
//!
//! fib(int n) -> int:
//!     if n <= 1:
//!         return n
//!     end;
//!     return fib(n - 1) + fib(n - 2)
//!
//! main:
//!     int n;
//!     input(n);
//!     output("fib = " .. fib(n))
//! ```
//!
//! The front-end either accepts a program or fails with a single
//! positioned diagnostic; the first error is fatal.

pub mod parser;
pub mod scanner;
pub mod symbol;
pub mod token;
pub mod types;

pub use parser::{Parser, ProgramInfo, SubroutineInfo};
pub use scanner::Scanner;
pub use symbol::{IdProps, SymbolTable};
pub use token::{Token, TokenKind};
pub use types::{BaseType, ValType};

use crate::utils::errors::CompileResult;

/// Run the whole front-end over a source text.
pub fn check(source: &str) -> CompileResult<ProgramInfo> {
    Parser::new(Scanner::new(source))?.parse_program()
}
