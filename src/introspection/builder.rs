//! Builder for [`TypeDescriptor`]s.
//!
//! # Example
//!
//! ```rust
//! use utilscope::introspection::{Constructor, FieldAttributes, TypeBuilder};
//!
//! let descriptor = TypeBuilder::class("demo.Numbers")
//!     .public()
//!     .sealed()
//!     .constructor(Constructor::private())
//!     .field("ZERO", FieldAttributes::PUBLIC | FieldAttributes::STATIC | FieldAttributes::INIT_ONLY)
//!     .static_method("parse")
//!     .build();
//!
//! assert_eq!(descriptor.fields.len(), 1);
//! ```

use crate::introspection::{
    Constructor, Field, Method, MethodAccessFlags, MethodModifiers, TypeAttributes,
    TypeDescriptor,
};

/// Provides a fluent API for building type descriptors
pub struct TypeBuilder {
    /// Descriptor being built
    descriptor: TypeDescriptor,
}

impl TypeBuilder {
    /// Start building a class with the given name
    ///
    /// ## Arguments
    /// * 'name' - Full name of the class, including namespace
    pub fn class(name: impl Into<String>) -> Self {
        TypeBuilder {
            descriptor: TypeDescriptor::new(name, TypeAttributes::CLASS),
        }
    }

    /// Start building an interface with the given name
    ///
    /// ## Arguments
    /// * 'name' - Full name of the interface, including namespace
    pub fn interface(name: impl Into<String>) -> Self {
        TypeBuilder {
            descriptor: TypeDescriptor::new(
                name,
                TypeAttributes::INTERFACE | TypeAttributes::ABSTRACT,
            ),
        }
    }

    /// Add raw `TypeAttributes` flags
    #[must_use]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.descriptor.flags |= flags;
        self
    }

    /// Give the type public visibility
    #[must_use]
    pub fn public(self) -> Self {
        self.with_flags(TypeAttributes::PUBLIC)
    }

    /// Mark the type as sealed (`final`)
    #[must_use]
    pub fn sealed(self) -> Self {
        self.with_flags(TypeAttributes::SEALED)
    }

    /// Mark the type as abstract
    #[must_use]
    pub fn abstract_type(self) -> Self {
        self.with_flags(TypeAttributes::ABSTRACT)
    }

    /// Declare a constructor
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.descriptor.constructors.push(constructor);
        self
    }

    /// Declare a field
    ///
    /// ## Arguments
    /// * 'name'  - Field name
    /// * 'flags' - Raw `FieldAttributes`
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, flags: u32) -> Self {
        self.descriptor.fields.push(Field::new(name, flags));
        self
    }

    /// Declare a method
    ///
    /// ## Arguments
    /// * 'name'  - Method name
    /// * 'flags' - Raw `MethodAttributes`
    #[must_use]
    pub fn method(mut self, name: impl Into<String>, flags: u32) -> Self {
        self.descriptor.methods.push(Method::new(name, flags));
        self
    }

    /// Declare a public static method
    #[must_use]
    pub fn static_method(self, name: impl Into<String>) -> Self {
        let flags = MethodAccessFlags::PUBLIC.bits()
            | (MethodModifiers::STATIC | MethodModifiers::HIDE_BY_SIG).bits();
        self.method(name, flags)
    }

    /// Declare a public instance method
    #[must_use]
    pub fn instance_method(self, name: impl Into<String>) -> Self {
        let flags = MethodAccessFlags::PUBLIC.bits() | MethodModifiers::HIDE_BY_SIG.bits();
        self.method(name, flags)
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}
