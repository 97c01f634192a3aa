use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Required tour fields are empty for a language. Callers may re-submit
    /// with an override to accept the warning.
    #[error("Missing required fields for '{language}': {}", fields.join(", "))]
    MissingRequiredFields {
        language: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
