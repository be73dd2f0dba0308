use crate::schema::ValidationError;
use crate::types::DbId;

/// Domain-level failures surfaced to the transport layer.
///
/// Schema rejections arrive here as [`CoreError::Validation`]. Constraint
/// rejections are not domain errors; the persistence layer reports them
/// with its own type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
