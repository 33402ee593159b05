//! Type introspection for verification.
//!
//! The verifier never looks at a type directly. Everything it needs to know (flags, declared
//! members, and a way to call the zero-argument constructor) is obtained through the
//! [`Introspect`] trait. Any metadata source can take part in verification by implementing it.
//!
//! # Key Components
//!
//! - [`Introspect`] - The introspection facility consumed by the verifier
//! - [`Invocation`] - Classified outcome of a forced constructor invocation
//! - [`TypeDescriptor`] / [`TypeBuilder`] - In-memory type description and its builder
//! - [`Field`], [`Method`], [`Constructor`] - Declared members
//! - [`ExceptionKind`], [`Thrown`], [`InvocationError`] - Failure identities
//!
//! # Example
//!
//! ```rust
//! use utilscope::introspection::{Constructor, Introspect, Invocation, TypeBuilder};
//!
//! let subject = TypeBuilder::class("demo.Strings")
//!     .sealed()
//!     .constructor(Constructor::private())
//!     .build();
//!
//! let ctor = subject.default_constructor().unwrap();
//! assert!(matches!(subject.instantiate(ctor, true), Invocation::Completed));
//! ```

mod attributes;
mod builder;
mod descriptor;
mod exception;
mod member;

pub use attributes::{
    FieldAttributes, MethodAccessFlags, MethodModifiers, TypeAttributes, METHOD_ACCESS_MASK,
};
pub use builder::TypeBuilder;
pub use descriptor::TypeDescriptor;
pub use exception::{ExceptionKind, InvocationError, Thrown};
pub use member::{Constructor, ConstructorBody, Field, Method};

/// Outcome of invoking a constructor through the introspection facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The constructor body ran to completion
    Completed,
    /// The constructor body raised
    Raised(Thrown),
    /// The constructor could not be invoked at all
    Failed(InvocationError),
}

/// Structural metadata of a single type, and the means to instantiate it.
///
/// Implementations report members in declaration order; the verifier reports the first
/// offending member in that order.
pub trait Introspect {
    /// Full name of the type, including its namespace
    fn name(&self) -> &str;

    /// Name of the type without its namespace
    fn simple_name(&self) -> &str {
        let name = self.name();
        name.rsplit('.').next().unwrap_or(name)
    }

    /// Raw `TypeAttributes` of the type
    fn flags(&self) -> u32;

    /// All declared instance constructors, regardless of accessibility and arity
    fn constructors(&self) -> &[Constructor];

    /// The declared zero-argument constructor, if any
    fn default_constructor(&self) -> Option<&Constructor> {
        self.constructors().iter().find(|ctor| ctor.params == 0)
    }

    /// Invokes `constructor` without arguments.
    ///
    /// ## Arguments
    /// * 'constructor'     - A constructor declared by this type
    /// * 'override_access' - Bypass accessibility enforcement
    fn instantiate(&self, constructor: &Constructor, override_access: bool) -> Invocation;

    /// All declared fields, static and instance
    fn fields(&self) -> &[Field];

    /// All declared methods, static and instance, excluding constructors
    fn methods(&self) -> &[Method];

    /// Returns true if the type can not be extended
    fn is_sealed(&self) -> bool {
        self.flags() & TypeAttributes::SEALED != 0
    }

    /// Returns true if the type can not be instantiated directly
    fn is_abstract(&self) -> bool {
        self.flags() & (TypeAttributes::ABSTRACT | TypeAttributes::INTERFACE) != 0
    }
}
