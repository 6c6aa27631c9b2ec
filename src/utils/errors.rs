//! Diagnostic types for the front-end.
//!
//! Every failure, whether lexical, syntactic, or semantic, is fatal and
//! flows through [`CompileError`]: a typed [`ErrorKind`] plus the source
//! position it is attributed to. The exact user-visible wording lives in
//! the `Display` implementations here and nowhere else.

use crate::frontend::token::TokenKind;
use crate::frontend::types::ValType;
use crate::utils::location::SourcePos;
use std::fmt;
use thiserror::Error;

/// What the parser was looking for when it found the wrong token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind
    Token(TokenKind),
    /// A `bool` or `int` type specifier
    TypeSpecifier,
    /// Any statement
    Statement,
    /// Any factor
    Factor,
    /// The right-hand side of an assignment
    ExpressionOrArrayAllocation,
    /// An operand of an `output` statement
    ExpressionOrString,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind.name()),
            Expected::TypeSpecifier => write!(f, "type specifier"),
            Expected::Statement => write!(f, "statement"),
            Expected::Factor => write!(f, "factor"),
            Expected::ExpressionOrArrayAllocation => {
                write!(f, "expression or array allocation")
            }
            Expected::ExpressionOrString => write!(f, "expression or string"),
        }
    }
}

/// The closed set of fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Scanner errors.
    /// A character outside the source language
    #[error("illegal character '{ch}' (ASCII #{code})")]
    IllegalCharacter {
        /// The offending character
        ch: char,
        /// Its ASCII code
        code: u32,
    },

    /// A string literal interrupted by a newline or end of input
    #[error("string not closed")]
    StringNotClosed,

    /// A `{ ... }` comment left open at end of input
    #[error("comment not closed")]
    CommentNotClosed,

    /// A number literal exceeding the representable range
    #[error("number too large")]
    NumberTooLarge,

    /// An unknown backslash escape inside a string literal
    #[error("illegal escape code '\\{0}' in string")]
    IllegalEscape(char),

    /// A non-printable character inside a string literal
    #[error("non-printable character (ASCII #{0}) in string")]
    NonPrintableInString(u32),

    // Parser and type-checker errors.
    /// The lookahead did not match what the grammar requires
    #[error("expected {expected}, but found {found}")]
    Expect {
        /// What the grammar requires here
        expected: Expected,
        /// The kind of the lookahead token
        found: TokenKind,
    },

    /// A token where the input should have ended
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// A name defined twice in the same scope
    #[error("multiple definition of '{0}'")]
    MultipleDefinition(String),

    /// A use of a name with no visible definition
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    /// A subroutine name used where a variable is required
    #[error("'{0}' is not a variable")]
    NotAVariable(String),

    /// An indexed or allocated name that is not an array
    #[error("'{0}' is not an array")]
    NotAnArray(String),

    /// A called name that has no return type
    #[error("'{0}' is not a function")]
    NotAFunction(String),

    /// A call statement whose target cannot stand as a statement
    #[error("'{0}' is not a procedure")]
    NotAProcedure(String),

    /// An operator applied to an array operand
    #[error("{0} is an illegal array operation")]
    IllegalArrayOperation(String),

    /// An un-indexed array where a scalar variable is required
    #[error("expected scalar variable instead of '{0}'")]
    ExpectedScalar(String),

    /// A call with fewer arguments than parameters
    #[error("too few arguments for call to '{0}'")]
    TooFewArguments(String),

    /// A call with more arguments than parameters
    #[error("too many arguments for call to '{0}'")]
    TooManyArguments(String),

    /// A function `return` without an expression
    #[error("missing return expression for a function")]
    MissingReturnExpression,

    /// A `return` expression outside a function body
    #[error("a return expression is not allowed for a procedure")]
    ReturnExpressionNotAllowed,

    /// A value of the wrong type
    #[error("incompatible types (expected {expected}, found {found}) {context}")]
    TypeMismatch {
        /// The type required here
        expected: ValType,
        /// The type actually synthesized
        found: ValType,
        /// Where the requirement comes from, e.g. `for 'if' guard`
        context: String,
    },
}

/// A fatal diagnostic: an error kind attributed to a source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pos}: {kind}")]
pub struct CompileError {
    /// The position the diagnostic is attributed to
    pub pos: SourcePos,
    /// The diagnostic itself
    pub kind: ErrorKind,
}

impl CompileError {
    /// Create a new diagnostic.
    pub fn new(pos: SourcePos, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    /// Render the full diagnostic line: `<source>:<line>:<col>: <message>`.
    pub fn render(&self, source_name: &str) -> String {
        format!("{}:{}: {}", source_name, self.pos, self.kind)
    }
}

/// Result type for all front-end operations.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_display() {
        let err = ErrorKind::Expect {
            expected: Expected::Token(TokenKind::Colon),
            found: TokenKind::Main,
        };
        assert_eq!(format!("{}", err), "expected ':', but found 'main'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ErrorKind::TypeMismatch {
            expected: ValType::INT,
            found: ValType::BOOL,
            context: "for operator +".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "incompatible types (expected int, found bool) for operator +"
        );
    }

    #[test]
    fn test_render() {
        let err = CompileError::new(
            SourcePos::new(4, 9),
            ErrorKind::UnknownIdentifier("x".to_string()),
        );
        assert_eq!(err.render("test.ampl"), "test.ampl:4:9: unknown identifier 'x'");
    }

    #[test]
    fn test_escape_display() {
        let err = ErrorKind::IllegalEscape('q');
        assert_eq!(format!("{}", err), "illegal escape code '\\q' in string");
    }
}
