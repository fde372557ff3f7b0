use thiserror::Error;

/// Input that was rejected before it reached the database
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was supplied but is empty or whitespace
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),

    /// The value is not a 24 character hex identifier
    #[error("'{0}' is not a valid ObjectId, it must be a 24-character hex string")]
    InvalidObjectId(String),
}

/// Ensures a required text field carries something other than whitespace
pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }

    Ok(value)
}
