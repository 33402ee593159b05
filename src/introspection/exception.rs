//! Exception identities and invocation failures.
//!
//! A constructor body signals failure by returning a [`Thrown`], which records the concrete
//! error type it was created from. Verification compares that identity against the
//! [`ExceptionKind`] configured on the verifier.

use std::{
    any::{type_name, TypeId},
    fmt,
};

use thiserror::Error;

/// Identity of a concrete error type.
///
/// Two kinds are equal only if they were created from the same Rust type; there is no notion of
/// sub-typing.
#[derive(Clone, Copy)]
pub struct ExceptionKind {
    id: TypeId,
    name: &'static str,
}

impl ExceptionKind {
    /// Returns the kind representing `E`
    #[must_use]
    pub fn of<E: ?Sized + 'static>() -> Self {
        ExceptionKind {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
        }
    }

    /// The fully qualified type name of this kind
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ExceptionKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExceptionKind {}

impl fmt::Debug for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExceptionKind").field(&self.name).finish()
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An error raised from inside a constructor body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thrown {
    kind: ExceptionKind,
    message: String,
}

impl Thrown {
    /// Captures `error`, remembering its concrete type and rendered message
    pub fn new<E: std::error::Error + 'static>(error: E) -> Self {
        Thrown {
            kind: ExceptionKind::of::<E>(),
            message: error.to_string(),
        }
    }

    /// The identity of the raised error type
    #[must_use]
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// The rendered message of the raised error
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

/// A failure of the invocation mechanism itself, as opposed to a failure raised by the
/// constructor body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// The type is abstract (or an interface) and can not be instantiated.
    #[error("{0} is abstract and can not be instantiated")]
    Abstract(String),

    /// The constructor is not accessible and access checks were not overridden.
    #[error("constructor of {0} is not accessible")]
    Inaccessible(String),

    /// The constructor expects arguments, but none were supplied.
    #[error("constructor of {type_name} expects {expected} argument(s), got 0")]
    ArgumentCount {
        /// Full name of the type
        type_name: String,
        /// Number of declared parameters
        expected: usize,
    },

    /// Any other facility specific failure
    #[error("{0}")]
    Other(String),
}
