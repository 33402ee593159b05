//! Field validation
//!
//! Fields are inspected in declaration order as reported by [`Introspect::fields`]; the first
//! offending field is the one reported.

use tracing::debug;

use crate::{
    introspection::Introspect,
    verification::AllowList,
    Error, Result,
};

/// Validator for declared fields
pub struct FieldValidator;

impl FieldValidator {
    /// Validates that every declared field is static
    ///
    /// # Errors
    /// Returns [`Error::InstanceField`] naming the first instance field.
    pub fn validate_no_instance_fields<T: Introspect + ?Sized>(target: &T) -> Result<()> {
        if let Some(field) = target.fields().iter().find(|field| !field.is_static()) {
            return Err(Error::InstanceField {
                type_name: target.name().to_string(),
                field: field.name.clone(),
            });
        }

        Ok(())
    }

    /// Validates that no static field can be reassigned
    ///
    /// Fields named in `allowed` are skipped, whatever their modifiers.
    ///
    /// # Errors
    /// Returns [`Error::MutableStaticField`] naming the first mutable static field.
    pub fn validate_no_mutable_static_fields<T: Introspect + ?Sized>(
        target: &T,
        allowed: &AllowList,
    ) -> Result<()> {
        for field in target.fields() {
            if allowed.contains(&field.name) {
                debug!(
                    target_type = target.name(),
                    field = %field.name,
                    "skipping allow-listed field"
                );
                continue;
            }

            if field.is_static() && !field.is_immutable() {
                return Err(Error::MutableStaticField {
                    type_name: target.name().to_string(),
                    field: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::subjects;

    #[test]
    fn test_static_fields_only() {
        assert!(FieldValidator::validate_no_instance_fields(&subjects::well_formed()).is_ok());
        assert!(
            FieldValidator::validate_no_instance_fields(&subjects::mutable_static_fields()).is_ok()
        );
    }

    #[test]
    fn test_first_instance_field_reported() {
        let err = FieldValidator::validate_no_instance_fields(&subjects::instance_fields())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "com.example.subjects.InstanceFields contains instance field instanceInt"
        );
    }

    #[test]
    fn test_mutable_static_fields() {
        let allowed = AllowList::default();

        let err = FieldValidator::validate_no_mutable_static_fields(
            &subjects::mutable_static_fields(),
            &allowed,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MutableStaticField { ref field, .. } if field == "staticInt"));

        assert!(FieldValidator::validate_no_mutable_static_fields(
            &subjects::immutable_static_fields(),
            &allowed
        )
        .is_ok());

        // instance fields are not static, so they are not this check's concern
        assert!(FieldValidator::validate_no_mutable_static_fields(
            &subjects::instance_fields(),
            &allowed
        )
        .is_ok());
    }

    #[test]
    fn test_allow_list() {
        let subject = subjects::instrumented();
        assert!(
            FieldValidator::validate_no_mutable_static_fields(&subject, &AllowList::default())
                .is_ok()
        );

        let err = FieldValidator::validate_no_mutable_static_fields(&subject, &AllowList::empty())
            .unwrap_err();
        assert!(err.to_string().contains("$jacocoData"));

        let mut allowed = AllowList::empty();
        allowed.insert("staticInt");
        let err = FieldValidator::validate_no_mutable_static_fields(
            &subjects::mutable_static_fields(),
            &allowed,
        )
        .unwrap_err();
        assert!(err.to_string().contains("staticLong"));
    }
}
