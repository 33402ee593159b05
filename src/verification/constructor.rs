//! Constructor validation
//!
//! The constructor stage is the only one with more than a flag inspection: the zero-argument
//! constructor is invoked (with access checks overridden) and the outcome is classified against
//! the exception kind the caller expects.
//!
//! | Outcome                      | Nothing expected                       | Kind `K` expected                       |
//! |------------------------------|----------------------------------------|-----------------------------------------|
//! | completed                    | pass                                   | [`Error::Instantiable`]                 |
//! | raised `K`                   | [`Error::UnexpectedConstructorFailure`]| pass                                    |
//! | raised `K2`                  | [`Error::UnexpectedConstructorFailure`]| [`Error::UnexpectedException`]          |
//! | invocation mechanism failed  | [`Error::Reflection`]                  | [`Error::Reflection`]                   |

use tracing::trace;

use crate::{
    introspection::{ExceptionKind, Introspect, Invocation},
    Error, Result,
};

/// Validator for declared constructors
pub struct ConstructorValidator;

impl ConstructorValidator {
    /// Validates that exactly one constructor is declared
    ///
    /// Accessibility and arity are not considered here.
    ///
    /// # Errors
    /// Returns [`Error::TooManyConstructors`] if the count is anything but one.
    pub fn validate_single<T: Introspect + ?Sized>(target: &T) -> Result<()> {
        let count = target.constructors().len();
        if count != 1 {
            return Err(Error::TooManyConstructors {
                type_name: target.name().to_string(),
                count,
            });
        }

        Ok(())
    }

    /// Validates accessibility of the zero-argument constructor and invokes it
    ///
    /// # Arguments
    /// * `target`       - The type under test
    /// * `check_access` - Whether the constructor must be private
    /// * `expected`     - The exception kind the constructor must raise, if any
    ///
    /// # Errors
    /// Returns a violation if the constructor is missing, not private, or behaves differently
    /// than expected. Returns [`Error::Reflection`] or [`Error::UnexpectedConstructorFailure`]
    /// if the verifier setup does not match the type.
    pub fn validate_construction<T: Introspect + ?Sized>(
        target: &T,
        check_access: bool,
        expected: Option<ExceptionKind>,
    ) -> Result<()> {
        let Some(constructor) = target.default_constructor() else {
            return Err(Error::NoConstructor {
                simple_name: target.simple_name().to_string(),
            });
        };

        if check_access && !constructor.is_private() {
            return Err(Error::ConstructorNotPrivate {
                type_name: target.name().to_string(),
            });
        }

        let outcome = target.instantiate(constructor, true);
        trace!(target_type = target.name(), ?outcome, "constructor invoked");

        Self::classify(target, outcome, expected)
    }

    fn classify<T: Introspect + ?Sized>(
        target: &T,
        outcome: Invocation,
        expected: Option<ExceptionKind>,
    ) -> Result<()> {
        match (outcome, expected) {
            (Invocation::Completed, None) => Ok(()),
            (Invocation::Completed, Some(_)) => Err(Error::Instantiable {
                simple_name: target.simple_name().to_string(),
            }),
            (Invocation::Raised(thrown), None) => Err(Error::UnexpectedConstructorFailure {
                type_name: target.name().to_string(),
                thrown,
            }),
            (Invocation::Raised(thrown), Some(expected)) => {
                if thrown.kind() == expected {
                    Ok(())
                } else {
                    Err(Error::UnexpectedException {
                        type_name: target.name().to_string(),
                        expected,
                        actual: thrown.kind(),
                    })
                }
            }
            (Invocation::Failed(source), _) => Err(Error::Reflection {
                type_name: target.name().to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        introspection::InvocationError,
        test::subjects::{self, IllegalArgument, IllegalState},
    };

    #[test]
    fn test_single_constructor() {
        assert!(ConstructorValidator::validate_single(&subjects::well_formed()).is_ok());
        let subject = subjects::parameterised_constructor();
        assert!(ConstructorValidator::validate_single(&subject).is_ok());
    }

    #[test]
    fn test_constructor_count() {
        let result = ConstructorValidator::validate_single(&subjects::multiple_constructors());
        assert!(matches!(
            result,
            Err(Error::TooManyConstructors { count: 2, .. })
        ));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("has too many constructors"));

        let result = ConstructorValidator::validate_single(&subjects::interface());
        assert!(matches!(
            result,
            Err(Error::TooManyConstructors { count: 0, .. })
        ));
    }

    #[test]
    fn test_missing_constructor() {
        for subject in [subjects::interface(), subjects::parameterised_constructor()] {
            for check_access in [true, false] {
                let err = ConstructorValidator::validate_construction(&subject, check_access, None)
                    .unwrap_err();
                assert!(matches!(err, Error::NoConstructor { .. }));
                assert!(err.to_string().contains("has no constructor"));
            }
        }
    }

    #[test]
    fn test_accessibility() {
        let subject = subjects::public_constructor();
        let err = ConstructorValidator::validate_construction(&subject, true, None).unwrap_err();
        assert!(matches!(err, Error::ConstructorNotPrivate { .. }));
        assert!(err.to_string().contains("should be private"));

        let result = ConstructorValidator::validate_construction(
            &subjects::protected_constructor(),
            true,
            None,
        );
        assert!(matches!(result, Err(Error::ConstructorNotPrivate { .. })));

        // the invocation still happens when the access assertion is off
        assert!(ConstructorValidator::validate_construction(
            &subjects::public_constructor(),
            false,
            None
        )
        .is_ok());
    }

    #[test]
    fn test_expected_exception() {
        let subject = subjects::throwing_constructor();

        assert!(ConstructorValidator::validate_construction(
            &subject,
            true,
            Some(ExceptionKind::of::<IllegalState>())
        )
        .is_ok());

        let err = ConstructorValidator::validate_construction(
            &subject,
            true,
            Some(ExceptionKind::of::<IllegalArgument>()),
        )
        .unwrap_err();
        assert!(err.is_violation());
        let message = err.to_string();
        assert!(message.contains("IllegalState"));
        assert!(message.contains("IllegalArgument"));
    }

    #[test]
    fn test_completed_but_expected() {
        let err = ConstructorValidator::validate_construction(
            &subjects::well_formed(),
            true,
            Some(ExceptionKind::of::<IllegalState>()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Instantiable { .. }));
        assert_eq!(err.to_string(), "should not be able to instantiate WellFormed");
    }

    #[test]
    fn test_raised_but_not_expected() {
        let subject = subjects::throwing_constructor();
        let err = ConstructorValidator::validate_construction(&subject, true, None).unwrap_err();
        assert!(err.is_internal());
        match err {
            Error::UnexpectedConstructorFailure { thrown, .. } => {
                assert_eq!(thrown.kind(), ExceptionKind::of::<IllegalState>());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reflection_failure() {
        for expected in [None, Some(ExceptionKind::of::<IllegalState>())] {
            let err = ConstructorValidator::validate_construction(
                &subjects::abstract_class(),
                false,
                expected,
            )
            .unwrap_err();
            assert!(err.is_internal());
            assert!(matches!(
                err,
                Error::Reflection {
                    source: InvocationError::Abstract(_),
                    ..
                }
            ));
        }
    }
}
