use crate::{introspection::Introspect, Error, Result};

/// Validator for class level flags
pub struct ClassValidator;

impl ClassValidator {
    /// Validates that the type can not be extended
    ///
    /// # Errors
    /// Returns [`Error::NotFinal`] if the type is not sealed.
    pub fn validate_final<T: Introspect + ?Sized>(target: &T) -> Result<()> {
        if !target.is_sealed() {
            return Err(Error::NotFinal {
                type_name: target.name().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::subjects;

    #[test]
    fn test_sealed_type() {
        assert!(ClassValidator::validate_final(&subjects::well_formed()).is_ok());
    }

    #[test]
    fn test_open_type() {
        let result = ClassValidator::validate_final(&subjects::non_final_class());
        assert!(matches!(result, Err(Error::NotFinal { .. })));
        assert_eq!(
            result.unwrap_err().to_string(),
            "com.example.subjects.NonFinalClass is not final"
        );
    }

    #[test]
    fn test_interface_is_not_final() {
        assert!(ClassValidator::validate_final(&subjects::interface()).is_err());
    }
}
