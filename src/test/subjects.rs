//! Subject types shared by the verification unit tests.
//!
//! Each factory describes a small type with exactly one defect (or none, for
//! [`well_formed`]) so that every check can be exercised in isolation.

use crate::introspection::{
    Constructor, FieldAttributes, MethodAccessFlags, Thrown, TypeBuilder, TypeDescriptor,
};

const CONSTANT: u32 =
    FieldAttributes::PRIVATE | FieldAttributes::STATIC | FieldAttributes::INIT_ONLY;
const COUNTER: u32 = FieldAttributes::PRIVATE | FieldAttributes::STATIC;
const INSTANCE: u32 = FieldAttributes::PRIVATE;

#[derive(Debug, thiserror::Error)]
#[error("utility class must not be instantiated")]
pub struct IllegalState;

#[derive(Debug, thiserror::Error)]
#[error("illegal argument")]
pub struct IllegalArgument;

// Helper function to start a sealed class with a private no-op constructor
fn utility(name: &str) -> TypeBuilder {
    TypeBuilder::class(format!("com.example.subjects.{name}"))
        .public()
        .sealed()
        .constructor(Constructor::private())
}

pub fn well_formed() -> TypeDescriptor {
    utility("WellFormed")
        .field("LIMIT", CONSTANT)
        .static_method("join")
        .static_method("split")
        .build()
}

pub fn non_final_class() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.NonFinalClass")
        .public()
        .constructor(Constructor::private())
        .static_method("join")
        .build()
}

pub fn open_with_instance_field() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.Open")
        .constructor(Constructor::private())
        .field("value", INSTANCE)
        .build()
}

pub fn multiple_constructors() -> TypeDescriptor {
    utility("MultipleConstructors")
        .constructor(Constructor::private().with_params(1))
        .build()
}

pub fn public_constructor() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.PublicConstructor")
        .public()
        .sealed()
        .constructor(Constructor::public())
        .build()
}

pub fn protected_constructor() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.ProtectedConstructor")
        .public()
        .sealed()
        .constructor(Constructor::new(MethodAccessFlags::FAMILY))
        .build()
}

pub fn parameterised_constructor() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.ParameterisedConstructor")
        .public()
        .sealed()
        .constructor(Constructor::private().with_params(1))
        .build()
}

pub fn interface() -> TypeDescriptor {
    TypeBuilder::interface("com.example.subjects.Task")
        .public()
        .instance_method("run")
        .build()
}

pub fn abstract_class() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.AbstractClass")
        .public()
        .abstract_type()
        .constructor(Constructor::private())
        .build()
}

pub fn throwing_constructor() -> TypeDescriptor {
    TypeBuilder::class("com.example.subjects.ThrowingConstructor")
        .public()
        .sealed()
        .constructor(Constructor::private().with_body(|| Err(Thrown::new(IllegalState))))
        .build()
}

pub fn instance_fields() -> TypeDescriptor {
    utility("InstanceFields")
        .field("LIMIT", CONSTANT)
        .field("instanceInt", INSTANCE)
        .field("instanceLong", INSTANCE)
        .build()
}

pub fn instance_methods() -> TypeDescriptor {
    utility("InstanceMethods")
        .static_method("join")
        .instance_method("instanceMethod")
        .build()
}

pub fn mutable_static_fields() -> TypeDescriptor {
    utility("MutableStaticFields")
        .field("LIMIT", CONSTANT)
        .field("staticInt", COUNTER)
        .field("staticLong", COUNTER)
        .build()
}

pub fn immutable_static_fields() -> TypeDescriptor {
    utility("ImmutableStaticFields")
        .field("LIMIT", CONSTANT)
        .field(
            "NAME",
            FieldAttributes::PUBLIC | FieldAttributes::STATIC | FieldAttributes::LITERAL,
        )
        .build()
}

pub fn instrumented() -> TypeDescriptor {
    utility("Instrumented")
        .field("$jacocoData", COUNTER)
        .static_method("join")
        .build()
}
