use strum::{Display, EnumCount, EnumIter};

/// The verification stages, declared in the order they run.
///
/// `Check::iter()` (via [`strum::IntoEnumIterator`]) yields the stages in execution order, which
/// is also the order in which violations win when a type has more than one defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Check {
    /// The type must be sealed
    #[strum(to_string = "final class")]
    FinalClass,
    /// The type must declare exactly one constructor
    #[strum(to_string = "only one constructor")]
    OnlyOneConstructor,
    /// The zero-argument constructor must be private; it is always invoked
    #[strum(to_string = "private constructor")]
    PrivateConstructor,
    /// No field may belong to instances
    #[strum(to_string = "instance fields")]
    InstanceFields,
    /// No method may belong to instances
    #[strum(to_string = "instance methods")]
    InstanceMethods,
    /// No static field may be reassignable
    #[strum(to_string = "mutable static fields")]
    MutableStaticFields,
}
