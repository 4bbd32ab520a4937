use crate::types::DbId;

/// Domain errors raised by the application itself.
///
/// Storage-constraint failures (missing foreign keys, duplicate edges)
/// stay as `sqlx::Error` and are classified at the HTTP boundary; the
/// only condition handlers detect themselves is a zero-row lookup,
/// update, or delete.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
