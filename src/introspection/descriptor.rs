//! In-memory type description.
//!
//! [`TypeDescriptor`] is the concrete [`Introspect`] implementation shipped with the crate. It is
//! usually assembled with a [`crate::TypeBuilder`], but all parts are plain data and can also be
//! filled from a metadata reader.

use crate::introspection::{
    Constructor, Field, Introspect, Invocation, InvocationError, Method, TypeAttributes,
};

/// Describes a type through its flags and declared members
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Full name, including namespace
    pub name: String,
    /// a 4-byte bitmask of type `TypeAttributes`
    pub flags: u32,
    /// Declared instance constructors
    pub constructors: Vec<Constructor>,
    /// Declared fields
    pub fields: Vec<Field>,
    /// Declared methods
    pub methods: Vec<Method>,
}

impl TypeDescriptor {
    /// Create an empty descriptor
    ///
    /// ## Arguments
    /// * 'name'  - Full name of the type
    /// * 'flags' - Raw `TypeAttributes`
    pub fn new(name: impl Into<String>, flags: u32) -> Self {
        TypeDescriptor {
            name: name.into(),
            flags,
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Returns true if the descriptor describes an interface
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.flags & TypeAttributes::INTERFACE != 0
    }
}

impl Introspect for TypeDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn flags(&self) -> u32 {
        self.flags
    }

    fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    fn instantiate(&self, constructor: &Constructor, override_access: bool) -> Invocation {
        // mechanism failures are reported before the body gets a chance to run
        if self.is_abstract() {
            return Invocation::Failed(InvocationError::Abstract(self.name.clone()));
        }

        if !override_access && !constructor.is_public() {
            return Invocation::Failed(InvocationError::Inaccessible(self.name.clone()));
        }

        if constructor.params != 0 {
            return Invocation::Failed(InvocationError::ArgumentCount {
                type_name: self.name.clone(),
                expected: constructor.params,
            });
        }

        match constructor.run() {
            Ok(()) => Invocation::Completed,
            Err(thrown) => Invocation::Raised(thrown),
        }
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn methods(&self) -> &[Method] {
        &self.methods
    }
}
