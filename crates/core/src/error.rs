use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A write would break referential integrity (e.g. a todo pointing at a
    /// category that does not exist).
    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
