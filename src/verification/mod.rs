//! Verification of utility class shape
//!
//! This module holds the verifier and the validators it runs. Every validator answers one fixed
//! structural question about a single type and returns the first violation it finds.
//!
//! # Stages
//!
//! | Stage                       | Validator                                             | Suppressible |
//! |-----------------------------|-------------------------------------------------------|--------------|
//! | [`Check::FinalClass`]        | [`ClassValidator::validate_final`]                    | yes          |
//! | [`Check::OnlyOneConstructor`]| [`ConstructorValidator::validate_single`]             | yes          |
//! | [`Check::PrivateConstructor`]| [`ConstructorValidator::validate_construction`]       | access only  |
//! | [`Check::InstanceFields`]    | [`FieldValidator::validate_no_instance_fields`]       | yes          |
//! | [`Check::InstanceMethods`]   | [`MethodValidator::validate_no_instance_methods`]     | yes          |
//! | [`Check::MutableStaticFields`]| [`FieldValidator::validate_no_mutable_static_fields`]| yes          |

mod allowlist;
mod check;
mod class;
mod config;
mod constructor;
mod field;
mod method;
mod verifier;

pub use allowlist::{AllowList, DEFAULT_ALLOWED_MUTABLE_STATIC_FIELDS};
pub use check::Check;
pub use class::ClassValidator;
pub use config::VerifierConfig;
pub use constructor::ConstructorValidator;
pub use field::FieldValidator;
pub use method::MethodValidator;
pub use verifier::UtilsVerifier;
