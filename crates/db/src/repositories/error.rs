//! Error type shared by the repositories.

use sea_orm::DbErr;

/// Error types for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Row not found for this owner.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name.
        entity: &'static str,
        /// Requested id.
        id: i64,
    },

    /// Parent row does not exist.
    #[error("Parent {entity} not found: {id}")]
    ParentNotFound {
        /// Entity name.
        entity: &'static str,
        /// Requested parent id.
        id: i64,
    },

    /// Parent row belongs to a different owner.
    #[error("Parent {0} belongs to a different owner")]
    ParentWrongOwner(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
