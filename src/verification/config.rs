//! Verifier configuration
//!
//! This module provides the suppression switches for the individual verification stages. Each
//! switch is independent; suppressing one stage never changes how another one behaves.

use crate::verification::Check;

/// Configuration for a verification run
///
/// All checks are active by default. Suppressing [`Check::PrivateConstructor`] only skips the
/// accessibility assertion; the constructor is still looked up and invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct VerifierConfig {
    /// Skip the sealed type assertion
    pub suppress_final_class_check: bool,

    /// Skip the single constructor assertion
    pub suppress_only_one_constructor_check: bool,

    /// Skip the private constructor assertion (invocation still happens)
    pub suppress_private_constructor_check: bool,

    /// Skip the instance field assertion
    pub suppress_instance_field_check: bool,

    /// Skip the instance method assertion
    pub suppress_instance_method_check: bool,

    /// Skip the mutable static field assertion
    pub suppress_mutable_static_fields_check: bool,
}

impl VerifierConfig {
    /// Creates a configuration with every check active
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration with every check suppressed
    ///
    /// Useful to single out one check by re-enabling it afterwards.
    #[must_use]
    pub fn suppressed() -> Self {
        Self {
            suppress_final_class_check: true,
            suppress_only_one_constructor_check: true,
            suppress_private_constructor_check: true,
            suppress_instance_field_check: true,
            suppress_instance_method_check: true,
            suppress_mutable_static_fields_check: true,
        }
    }

    /// Returns true if `check` is suppressed
    #[must_use]
    pub fn is_suppressed(&self, check: Check) -> bool {
        match check {
            Check::FinalClass => self.suppress_final_class_check,
            Check::OnlyOneConstructor => self.suppress_only_one_constructor_check,
            Check::PrivateConstructor => self.suppress_private_constructor_check,
            Check::InstanceFields => self.suppress_instance_field_check,
            Check::InstanceMethods => self.suppress_instance_method_check,
            Check::MutableStaticFields => self.suppress_mutable_static_fields_check,
        }
    }

    /// Sets the suppression state of `check`
    pub fn set_suppressed(&mut self, check: Check, suppressed: bool) {
        let flag = match check {
            Check::FinalClass => &mut self.suppress_final_class_check,
            Check::OnlyOneConstructor => &mut self.suppress_only_one_constructor_check,
            Check::PrivateConstructor => &mut self.suppress_private_constructor_check,
            Check::InstanceFields => &mut self.suppress_instance_field_check,
            Check::InstanceMethods => &mut self.suppress_instance_method_check,
            Check::MutableStaticFields => &mut self.suppress_mutable_static_fields_check,
        };
        *flag = suppressed;
    }
}
