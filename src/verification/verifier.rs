//! The utility class verifier.
//!
//! [`UtilsVerifier`] is configured once per test with chained calls and then runs every active
//! check against the bound type. The first violation ends the run.

use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    introspection::{ExceptionKind, Introspect},
    verification::{
        AllowList, Check, ClassValidator, ConstructorValidator, FieldValidator, MethodValidator,
        VerifierConfig,
    },
    Result,
};

/// Verifies that a type is a well formed utility class.
///
/// By default the verifier asserts that the type:
/// - is sealed
/// - declares exactly one constructor, which is private and takes no arguments
/// - can be instantiated through that constructor without raising
/// - declares no instance fields and no instance methods
/// - declares no mutable static fields
///
/// Single checks can be suppressed, though doing so is rarely a good idea for a utility class.
///
/// # Example
///
/// ```rust
/// use utilscope::{Constructor, TypeBuilder, UtilsVerifier};
///
/// let strings = TypeBuilder::class("demo.Strings")
///     .sealed()
///     .constructor(Constructor::private())
///     .static_method("join")
///     .build();
///
/// UtilsVerifier::for_type(&strings).verify()?;
///
/// let open = TypeBuilder::class("demo.Open")
///     .constructor(Constructor::private())
///     .build();
///
/// UtilsVerifier::for_type(&open)
///     .suppress_final_class_check(true)
///     .verify()?;
/// # Ok::<(), utilscope::Error>(())
/// ```
#[derive(Debug)]
pub struct UtilsVerifier<'a, T: Introspect + ?Sized> {
    target: &'a T,
    config: VerifierConfig,
    expected_exception: Option<ExceptionKind>,
    allowed_fields: AllowList,
}

impl<'a, T: Introspect + ?Sized> UtilsVerifier<'a, T> {
    /// Creates a verifier for `target` with every check active
    pub fn for_type(target: &'a T) -> Self {
        UtilsVerifier {
            target,
            config: VerifierConfig::default(),
            expected_exception: None,
            allowed_fields: AllowList::default(),
        }
    }

    /// Expect the constructor to raise `E` when invoked
    #[must_use]
    pub fn with_constructor_throwing<E: 'static>(self) -> Self {
        self.with_constructor_throwing_kind(ExceptionKind::of::<E>())
    }

    /// Expect the constructor to raise `kind` when invoked
    #[must_use]
    pub fn with_constructor_throwing_kind(mut self, kind: ExceptionKind) -> Self {
        self.expected_exception = Some(kind);
        self
    }

    /// Replace all suppression flags at once
    #[must_use]
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Exempt a field name from the mutable static field check
    #[must_use]
    pub fn allow_mutable_static_field(mut self, name: impl Into<String>) -> Self {
        self.allowed_fields.insert(name);
        self
    }

    /// Suppress the sealed type check. Use if a non-final utility type is allowed.
    #[must_use]
    pub fn suppress_final_class_check(self, suppress: bool) -> Self {
        self.suppress(Check::FinalClass, suppress)
    }

    /// Suppress the single constructor check. Use if more constructors are allowed.
    #[must_use]
    pub fn suppress_only_one_constructor_check(self, suppress: bool) -> Self {
        self.suppress(Check::OnlyOneConstructor, suppress)
    }

    /// Suppress the private constructor check. The constructor is still invoked.
    #[must_use]
    pub fn suppress_private_constructor_check(self, suppress: bool) -> Self {
        self.suppress(Check::PrivateConstructor, suppress)
    }

    /// Suppress the instance field check.
    #[must_use]
    pub fn suppress_instance_field_check(self, suppress: bool) -> Self {
        self.suppress(Check::InstanceFields, suppress)
    }

    /// Suppress the instance method check.
    #[must_use]
    pub fn suppress_instance_method_check(self, suppress: bool) -> Self {
        self.suppress(Check::InstanceMethods, suppress)
    }

    /// Suppress the mutable static field check.
    #[must_use]
    pub fn suppress_mutable_static_fields_check(self, suppress: bool) -> Self {
        self.suppress(Check::MutableStaticFields, suppress)
    }

    /// The active configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// The exception kind the constructor is expected to raise
    pub fn expected_exception(&self) -> Option<ExceptionKind> {
        self.expected_exception
    }

    /// Runs all active checks in stage order
    ///
    /// # Errors
    /// Returns the first violation found, or an internal error if the constructor could not be
    /// evaluated. See [`crate::Error`] for the two classes.
    pub fn verify(&self) -> Result<()> {
        for check in Check::iter() {
            self.run(check)?;
        }

        debug!(target_type = self.target.name(), "verification passed");
        Ok(())
    }

    fn suppress(mut self, check: Check, suppress: bool) -> Self {
        self.config.set_suppressed(check, suppress);
        self
    }

    fn run(&self, check: Check) -> Result<()> {
        let suppressed = self.config.is_suppressed(check);

        // the constructor stage always invokes; suppression only drops its access assertion
        if suppressed && check != Check::PrivateConstructor {
            debug!(target_type = self.target.name(), %check, "check suppressed");
            return Ok(());
        }

        let result = match check {
            Check::FinalClass => ClassValidator::validate_final(self.target),
            Check::OnlyOneConstructor => ConstructorValidator::validate_single(self.target),
            Check::PrivateConstructor => ConstructorValidator::validate_construction(
                self.target,
                !suppressed,
                self.expected_exception,
            ),
            Check::InstanceFields => FieldValidator::validate_no_instance_fields(self.target),
            Check::InstanceMethods => MethodValidator::validate_no_instance_methods(self.target),
            Check::MutableStaticFields => {
                FieldValidator::validate_no_mutable_static_fields(self.target, &self.allowed_fields)
            }
        };

        match &result {
            Ok(()) => debug!(target_type = self.target.name(), %check, "check passed"),
            Err(error) => debug!(target_type = self.target.name(), %check, %error, "check failed"),
        }

        result
    }
}
