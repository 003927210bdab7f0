//! Errors produced by the engines.

use classroom_core::Entity;
use classroom_store::StoreError;
use thiserror::Error;

/// Result type alias for engine operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Engine failure.
///
/// `NotFound` is the only kind the engines raise themselves; `Store`
/// passes infrastructure failures through untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced teacher or student does not exist.
    #[error("{0} not found")]
    NotFound(Entity),

    /// The relationship store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Which entity was missing, if this is a `NotFound`.
    pub fn missing_entity(&self) -> Option<Entity> {
        match self {
            Self::NotFound(entity) => Some(*entity),
            Self::Store(_) => None,
        }
    }
}
