//! The value-type algebra for AMPL-2023.
//!
//! A value type is a base kind plus two independent attributes: whether
//! the value is an array, and whether it is callable. A *function* is a
//! callable with a base kind (its return kind); a *procedure* is a
//! callable without one. The base-kind-less, non-callable value stands
//! for "no type".

use std::fmt;

/// The base kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// No base kind
    None,
    /// Boolean
    Boolean,
    /// Integer
    Integer,
}

/// A value type: base kind, array attribute, callable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValType {
    base: BaseType,
    array: bool,
    callable: bool,
}

impl ValType {
    /// The "no type" value.
    pub const NONE: ValType = ValType { base: BaseType::None, array: false, callable: false };
    /// Scalar integer.
    pub const INT: ValType = ValType { base: BaseType::Integer, array: false, callable: false };
    /// Scalar boolean.
    pub const BOOL: ValType = ValType { base: BaseType::Boolean, array: false, callable: false };

    /// A scalar of the given base kind.
    pub fn scalar(base: BaseType) -> Self {
        Self { base, array: false, callable: false }
    }

    /// A procedure: callable without a return kind.
    pub fn procedure() -> Self {
        Self { base: BaseType::None, array: false, callable: true }
    }

    /// The base kind.
    pub fn base(self) -> BaseType {
        self.base
    }

    /// Check for the array attribute.
    pub fn is_array(self) -> bool {
        self.array
    }

    /// Check for the callable attribute.
    pub fn is_callable(self) -> bool {
        self.callable
    }

    /// Check whether this is a function: callable with a return kind.
    pub fn is_function(self) -> bool {
        self.callable && self.base != BaseType::None
    }

    /// Check whether this is a procedure: callable without a return kind.
    pub fn is_procedure(self) -> bool {
        self.callable && self.base == BaseType::None
    }

    /// Check whether this is an integer value (scalar or array, not
    /// callable).
    pub fn is_integer(self) -> bool {
        self.base == BaseType::Integer && !self.callable
    }

    /// Check whether this is a boolean value (scalar or array, not
    /// callable).
    pub fn is_boolean(self) -> bool {
        self.base == BaseType::Boolean && !self.callable
    }

    /// This type with the array attribute set.
    pub fn with_array(self) -> Self {
        Self { array: true, ..self }
    }

    /// This type with the callable attribute set.
    pub fn with_callable(self) -> Self {
        Self { callable: true, ..self }
    }

    /// The element type: the array attribute stripped.
    pub fn elem(self) -> Self {
        Self { array: false, ..self }
    }

    /// The base kind alone: array and callable attributes stripped.
    pub fn base_only(self) -> Self {
        ValType::scalar(self.base)
    }

    /// The type of a return expression: the callable attribute stripped.
    /// Idempotent.
    pub fn returned(self) -> Self {
        Self { callable: false, ..self }
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.callable && self.base == BaseType::None {
            return write!(f, "procedure");
        }
        match self.base {
            BaseType::None => write!(f, "none")?,
            BaseType::Boolean => write!(f, "bool")?,
            BaseType::Integer => write!(f, "int")?,
        }
        if self.array {
            write!(f, " array")?;
        }
        if self.callable {
            write!(f, " function")?;
        }
        Ok(())
    }
}
