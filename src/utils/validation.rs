use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

pub fn no_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("whitespace"));
    }
    Ok(())
}

/// Code of the first error recorded for `field`, if any.
pub fn first_code(errors: &ValidationErrors, field: &str) -> Option<Cow<'static, str>> {
    errors
        .field_errors()
        .get(field)
        .and_then(|errs| errs.first())
        .map(|err| err.code.clone())
}

/// Message of the first error recorded for `field`, if any.
pub fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .get(field)
        .and_then(|errs| errs.first())
        .and_then(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
}
