use crate::{introspection::Introspect, Error, Result};

/// Validator for declared methods
pub struct MethodValidator;

impl MethodValidator {
    /// Validates that every declared method is static
    ///
    /// Constructors are not part of [`Introspect::methods`] and are never reported here.
    ///
    /// # Errors
    /// Returns [`Error::InstanceMethod`] naming the first instance method.
    pub fn validate_no_instance_methods<T: Introspect + ?Sized>(target: &T) -> Result<()> {
        if let Some(method) = target.methods().iter().find(|method| !method.is_static()) {
            return Err(Error::InstanceMethod {
                type_name: target.name().to_string(),
                method: method.name.clone(),
            });
        }

        Ok(())
    }
}
