//! Conversion of `validator` derive results into domain errors.
//!
//! Request DTOs derive [`validator::Validate`]; handlers call
//! `input.validate()?` and rely on the `From` impl below to surface a single
//! human-readable message.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Flatten field errors into one message, sorted by field name.
///
/// Uses each error's `message` when present, otherwise falls back to
/// `"<field> is invalid (<code>)"`.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                };
                (field.clone(), message)
            })
        })
        .collect();
    parts.sort();

    parts
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(validation_message(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "Name is too short"))]
        name: String,
        #[validate(length(min = 1))]
        tag: String,
    }

    #[test]
    fn uses_custom_message_when_present() {
        let sample = Sample {
            name: "ab".into(),
            tag: "ok".into(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Name is too short");
    }

    #[test]
    fn falls_back_to_field_and_code() {
        let sample = Sample {
            name: "long enough".into(),
            tag: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "tag is invalid (length)");
    }

    #[test]
    fn multiple_fields_are_joined_in_field_order() {
        let sample = Sample {
            name: String::new(),
            tag: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Name is too short; tag is invalid (length)"
        );
    }

    #[test]
    fn converts_into_core_validation_error() {
        let sample = Sample {
            name: "x".into(),
            tag: "y".into(),
        };
        let err: CoreError = sample.validate().unwrap_err().into();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Name is too short");
    }
}
