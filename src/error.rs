use thiserror::Error;

use crate::{
    introspection::{ExceptionKind, InvocationError, Thrown},
    verification::Check,
};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant belongs to exactly one of two disjoint classes:
///
/// # Error Categories
///
/// ## Violations
/// A structural defect of the type under test, or a mismatch between the expected and the
/// actual constructor failure. These are the assertion failures a test is written to catch.
/// - [`Error::NotFinal`] - Type is not sealed
/// - [`Error::TooManyConstructors`] - Type does not declare exactly one constructor
/// - [`Error::NoConstructor`] - Type has no zero-argument constructor
/// - [`Error::ConstructorNotPrivate`] - Constructor is not private
/// - [`Error::Instantiable`] - Constructor completed although it was expected to raise
/// - [`Error::UnexpectedException`] - Constructor raised a different kind than expected
/// - [`Error::InstanceField`] - Type declares an instance field
/// - [`Error::InstanceMethod`] - Type declares an instance method
/// - [`Error::MutableStaticField`] - Type declares a static field that can be reassigned
///
/// ## Internal Errors
/// The introspection facility could not perform the requested operation, or the verifier was
/// set up in a way that does not match the type. These indicate a problem with the test itself.
/// - [`Error::Reflection`] - Constructor could not be invoked at all
/// - [`Error::UnexpectedConstructorFailure`] - Constructor raised, but no failure was configured
///
/// # Examples
///
/// ```rust
/// use utilscope::{Error, TypeBuilder, UtilsVerifier};
///
/// let subject = TypeBuilder::class("demo.Open").build();
///
/// match UtilsVerifier::for_type(&subject).verify() {
///     Ok(()) => println!("well formed"),
///     Err(e) if e.is_violation() => eprintln!("violation: {e}"),
///     Err(e) => eprintln!("verifier misuse: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Violations
    /// The type under test is not marked as sealed.
    #[error("{type_name} is not final")]
    NotFinal {
        /// Full name of the type under test
        type_name: String,
    },

    /// The type under test declares more (or fewer) than one constructor.
    #[error("{type_name} has too many constructors ({count} declared, expected 1)")]
    TooManyConstructors {
        /// Full name of the type under test
        type_name: String,
        /// Number of declared constructors
        count: usize,
    },

    /// No zero-argument constructor could be found.
    ///
    /// This is raised regardless of the suppression state of the constructor check, as the
    /// invocation half of that check can never be skipped.
    #[error("{simple_name} has no constructor")]
    NoConstructor {
        /// Simple name of the type under test
        simple_name: String,
    },

    /// The zero-argument constructor is not private.
    #[error("constructor of {type_name} should be private")]
    ConstructorNotPrivate {
        /// Full name of the type under test
        type_name: String,
    },

    /// The constructor completed, but an exception was configured to be raised.
    #[error("should not be able to instantiate {simple_name}")]
    Instantiable {
        /// Simple name of the type under test
        simple_name: String,
    },

    /// The constructor raised a different kind of exception than the configured one.
    #[error("expected exception: {expected} got: {actual}")]
    UnexpectedException {
        /// Full name of the type under test
        type_name: String,
        /// The configured exception kind
        expected: ExceptionKind,
        /// The exception kind that was actually raised
        actual: ExceptionKind,
    },

    /// A declared field belongs to instances rather than to the type.
    #[error("{type_name} contains instance field {field}")]
    InstanceField {
        /// Full name of the type under test
        type_name: String,
        /// Name of the offending field
        field: String,
    },

    /// A declared method belongs to instances rather than to the type.
    #[error("{type_name} contains instance method {method}")]
    InstanceMethod {
        /// Full name of the type under test
        type_name: String,
        /// Name of the offending method
        method: String,
    },

    /// A static field is neither init-only nor a literal.
    #[error("{type_name} contains static mutable field {field}")]
    MutableStaticField {
        /// Full name of the type under test
        type_name: String,
        /// Name of the offending field
        field: String,
    },

    // Internal errors
    /// The introspection facility failed to invoke the constructor.
    ///
    /// The failure happened in the invocation mechanism (abstract type, inaccessible
    /// constructor, argument mismatch) and not inside the constructor body.
    #[error("failed to instantiate {type_name}: {source}")]
    Reflection {
        /// Full name of the type under test
        type_name: String,
        /// The underlying invocation failure
        #[source]
        source: InvocationError,
    },

    /// The constructor raised, but the verifier was not told to expect any exception.
    #[error("constructor of {type_name} raised {thrown} but no exception was expected")]
    UnexpectedConstructorFailure {
        /// Full name of the type under test
        type_name: String,
        /// The exception raised by the constructor body
        thrown: Thrown,
    },
}

impl Error {
    /// Returns true if this error reports a structural defect of the type under test.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        !self.is_internal()
    }

    /// Returns true if this error reports a setup or tooling problem rather than a defect.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::Reflection { .. } | Error::UnexpectedConstructorFailure { .. }
        )
    }

    /// The verification stage that produced this error
    #[must_use]
    pub fn check(&self) -> Check {
        match self {
            Error::NotFinal { .. } => Check::FinalClass,
            Error::TooManyConstructors { .. } => Check::OnlyOneConstructor,
            Error::NoConstructor { .. }
            | Error::ConstructorNotPrivate { .. }
            | Error::Instantiable { .. }
            | Error::UnexpectedException { .. }
            | Error::Reflection { .. }
            | Error::UnexpectedConstructorFailure { .. } => Check::PrivateConstructor,
            Error::InstanceField { .. } => Check::InstanceFields,
            Error::InstanceMethod { .. } => Check::InstanceMethods,
            Error::MutableStaticField { .. } => Check::MutableStaticFields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_classification() {
        let violation = Error::NotFinal {
            type_name: "a.B".to_string(),
        };
        assert!(violation.is_violation());
        assert!(!violation.is_internal());

        let internal = Error::UnexpectedConstructorFailure {
            type_name: "a.B".to_string(),
            thrown: Thrown::new(Boom),
        };
        assert!(internal.is_internal());
        assert_eq!(internal.check(), Check::PrivateConstructor);
    }

    #[test]
    fn test_messages() {
        let err = Error::TooManyConstructors {
            type_name: "a.B".to_string(),
            count: 2,
        };
        assert!(err.to_string().contains("has too many constructors"));

        let err = Error::MutableStaticField {
            type_name: "a.B".to_string(),
            field: "counter".to_string(),
        };
        assert_eq!(err.to_string(), "a.B contains static mutable field counter");
    }
}
