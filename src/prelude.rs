//! # utilscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the utilscope library. Import this module to get quick access to everything needed
//! to describe a type and verify it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all utilscope operations
pub use crate::Error;

/// The result type used throughout utilscope
pub use crate::Result;

// ================================================================================================
// Verification
// ================================================================================================

/// Main entry point for verifying a type
pub use crate::verification::UtilsVerifier;

/// Suppression configuration and the verification stages
pub use crate::verification::{AllowList, Check, VerifierConfig};

// ================================================================================================
// Introspection
// ================================================================================================

/// The introspection facility and the outcome of a constructor invocation
pub use crate::introspection::{Introspect, Invocation};

/// In-memory type description
pub use crate::introspection::{Constructor, Field, Method, TypeBuilder, TypeDescriptor};

/// Attribute flags
pub use crate::introspection::{
    FieldAttributes, MethodAccessFlags, MethodModifiers, TypeAttributes,
};

/// Failure identities
pub use crate::introspection::{ExceptionKind, InvocationError, Thrown};
