//! Required-field checks for creation payloads.

/// Creation payload whose fields can be looked up by their JSON name
pub trait CreatePayload {
    /// Fields that must be present and non-empty
    const REQUIRED_FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;
}

/// A required field was missing or empty
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

/// Check that every required field is present and non-empty
pub fn validate_create<P: CreatePayload>(payload: &P) -> Result<(), ValidationError> {
    validate_fields(payload, P::REQUIRED_FIELDS)
}

/// Check an explicit required-field set against a payload
pub fn validate_fields<P: CreatePayload>(
    payload: &P,
    required_fields: &[&str],
) -> Result<(), ValidationError> {
    let all_present = required_fields
        .iter()
        .all(|name| payload.field(name).is_some_and(|value| !value.is_empty()));

    if all_present {
        Ok(())
    } else {
        Err(ValidationError {
            message: required_fields_message(required_fields),
        })
    }
}

/// Human readable message naming the required fields
///
/// `["name", "email"]` becomes "name and email are required".
pub fn required_fields_message(required_fields: &[&str]) -> String {
    match required_fields {
        [] => "no fields are required".to_string(),
        [only] => format!("{only} is required"),
        [init @ .., last] => format!("{} and {last} are required", init.join(", ")),
    }
}
