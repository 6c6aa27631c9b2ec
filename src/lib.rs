//! # amplc - a compiler front-end for AMPL-2023
//!
//! A recursive-descent front-end for the AMPL-2023 language: scanning,
//! parsing, scope-aware symbol management, and type checking, all in a
//! single pass. There is no error recovery: the first lexical,
//! syntactic, or semantic error terminates compilation with one
//! diagnostic carrying its source position.
//!
//! ## Architecture
//!
//! ```text
//! source text → Scanner → Parser (+ SymbolTable + ValType checks) → ProgramInfo
//! ```
//!
//! No AST is materialized. An accepted program yields a
//! [`frontend::ProgramInfo`] carrying the program name and the local
//! variable frame width of every subroutine, which is all a downstream
//! code generator needs from this stage.
//!
//! ## Example
//!
//! ```rust
//! let info = amplc::check("program p: main: int a; let a = 1 + 2").unwrap();
//! assert_eq!(info.name, "p");
//! assert_eq!(info.main_frame_width, 2);
//!
//! let err = amplc::check("program p: main: int a; let a = true").unwrap_err();
//! assert_eq!(
//!     err.render("demo.ampl"),
//!     "demo.ampl:1:33: incompatible types (expected int, found bool) for assignment to 'a'",
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frontend;
pub mod utils;

pub use frontend::check;
pub use utils::errors::{CompileError, CompileResult, ErrorKind};
pub use utils::location::SourcePos;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    //! Everything needed to drive the front-end programmatically.

    pub use crate::frontend::{
        check, ProgramInfo, Scanner, SubroutineInfo, SymbolTable, Token, TokenKind, ValType,
    };
    pub use crate::utils::errors::{CompileError, CompileResult, ErrorKind, Expected};
    pub use crate::utils::location::SourcePos;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
