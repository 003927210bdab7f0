//! Error types for the storage layer.

use classroom_core::Entity;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// A write referenced a record that does not exist.
    #[error("{entity} not found: {email}")]
    Missing { entity: Entity, email: String },

    /// A record with this email already exists.
    #[error("duplicate {entity}: {email}")]
    Duplicate { entity: Entity, email: String },

    /// A stored row could not be converted to a domain type.
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn missing(entity: Entity, email: &classroom_core::Email) -> Self {
        Self::Missing {
            entity,
            email: email.to_string(),
        }
    }

    /// Map an insert failure, turning unique violations into `Duplicate`.
    pub(crate) fn from_insert(err: sqlx::Error, entity: Entity, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate {
                entity,
                email: email.to_string(),
            },
            _ => Self::Connection(err),
        }
    }
}
