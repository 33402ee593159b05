//! Declared members of a type: fields, methods and constructors.

use std::{fmt, sync::Arc};

use crate::introspection::{
    attributes::{FieldAttributes, MethodAccessFlags, MethodModifiers},
    Thrown,
};

/// The executable part of a constructor.
///
/// Returns `Err` to model a constructor that raises, e.g. a guard against instantiation.
pub type ConstructorBody = Arc<dyn Fn() -> std::result::Result<(), Thrown> + Send + Sync>;

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name
    pub name: String,
    /// a 2-byte bitmask of type `FieldAttributes`
    pub flags: u32,
}

impl Field {
    /// Create a new field
    ///
    /// ## Arguments
    /// * 'name'  - The name of the field
    /// * 'flags' - Raw `FieldAttributes`
    pub fn new(name: impl Into<String>, flags: u32) -> Self {
        Field {
            name: name.into(),
            flags,
        }
    }

    /// Returns true if the field belongs to the type rather than to instances
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags & FieldAttributes::STATIC != 0
    }

    /// Returns true if the field can not be reassigned after initialization
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.flags & (FieldAttributes::INIT_ONLY | FieldAttributes::LITERAL) != 0
    }
}

/// A declared method (constructors are not methods)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// The method name
    pub name: String,
    /// a 2-byte bitmask of type `MethodAttributes`
    pub flags: u32,
}

impl Method {
    /// Create a new method
    ///
    /// ## Arguments
    /// * 'name'  - The name of the method
    /// * 'flags' - Raw `MethodAttributes`
    pub fn new(name: impl Into<String>, flags: u32) -> Self {
        Method {
            name: name.into(),
            flags,
        }
    }

    /// Get the modifiers of this method
    #[must_use]
    pub fn modifiers(&self) -> MethodModifiers {
        MethodModifiers::from_method_flags(self.flags)
    }

    /// Returns true if the method belongs to the type rather than to instances
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers().contains(MethodModifiers::STATIC)
    }
}

/// A declared instance constructor
#[derive(Clone)]
pub struct Constructor {
    /// a 2-byte bitmask of type `MethodAttributes`
    pub flags: u32,
    /// Number of declared parameters
    pub params: usize,
    body: Option<ConstructorBody>,
}

impl Constructor {
    /// Create a zero-argument constructor with an empty body
    ///
    /// ## Arguments
    /// * 'access' - The accessibility of the constructor
    #[must_use]
    pub fn new(access: MethodAccessFlags) -> Self {
        Constructor {
            flags: access.bits(),
            params: 0,
            body: None,
        }
    }

    /// A private zero-argument constructor with an empty body
    #[must_use]
    pub fn private() -> Self {
        Self::new(MethodAccessFlags::PRIVATE)
    }

    /// A public zero-argument constructor with an empty body
    #[must_use]
    pub fn public() -> Self {
        Self::new(MethodAccessFlags::PUBLIC)
    }

    /// Set the number of declared parameters
    #[must_use]
    pub fn with_params(mut self, params: usize) -> Self {
        self.params = params;
        self
    }

    /// Set the body executed on invocation
    #[must_use]
    pub fn with_body<F>(mut self, body: F) -> Self
    where
        F: Fn() -> std::result::Result<(), Thrown> + Send + Sync + 'static,
    {
        self.body = Some(Arc::new(body));
        self
    }

    /// Get the access flags of this constructor
    #[must_use]
    pub fn access(&self) -> MethodAccessFlags {
        MethodAccessFlags::from_method_flags(self.flags)
    }

    /// Returns true if the constructor has the most restrictive accessibility
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.access() == MethodAccessFlags::PRIVATE
    }

    /// Returns true if the constructor can be called by anyone
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access() == MethodAccessFlags::PUBLIC
    }

    /// Runs the constructor body, if any
    ///
    /// # Errors
    /// Returns the [`Thrown`] raised by the body.
    pub fn run(&self) -> std::result::Result<(), Thrown> {
        match &self.body {
            Some(body) => body(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("access", &self.access())
            .field("params", &self.params)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("no instances")]
    struct NoInstances;

    #[test]
    fn test_field_modifiers() {
        let constant = Field::new("MAX", FieldAttributes::STATIC | FieldAttributes::LITERAL);
        assert!(constant.is_static());
        assert!(constant.is_immutable());

        let counter = Field::new("counter", FieldAttributes::PRIVATE | FieldAttributes::STATIC);
        assert!(counter.is_static());
        assert!(!counter.is_immutable());

        let value = Field::new("value", FieldAttributes::PRIVATE | FieldAttributes::INIT_ONLY);
        assert!(!value.is_static());
        assert!(value.is_immutable());
    }

    #[test]
    fn test_method_modifiers() {
        let helper = Method::new(
            "helper",
            MethodAccessFlags::PUBLIC.bits() | MethodModifiers::STATIC.bits(),
        );
        assert!(helper.is_static());

        let instance = Method::new("get", MethodAccessFlags::PUBLIC.bits());
        assert!(!instance.is_static());
    }

    #[test]
    fn test_constructor() {
        let ctor = Constructor::private();
        assert!(ctor.is_private());
        assert!(!ctor.is_public());
        assert_eq!(ctor.params, 0);
        assert!(ctor.run().is_ok());

        let guarded = Constructor::private().with_body(|| Err(Thrown::new(NoInstances)));
        let thrown = guarded.run().unwrap_err();
        assert_eq!(thrown.message(), "no instances");

        let family = Constructor::new(MethodAccessFlags::FAMILY).with_params(2);
        assert!(!family.is_private());
        assert_eq!(family.params, 2);
    }
}
