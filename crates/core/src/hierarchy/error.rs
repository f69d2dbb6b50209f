//! Hierarchy error types.

use cosa_shared::AppError;
use cosa_shared::types::EntityId;
use thiserror::Error;

/// Errors raised while assembling or updating the organization tree.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// The same slug appears twice in the tree.
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(EntityId),

    /// Club not found.
    #[error("Club not found: {0}")]
    ClubNotFound(EntityId),

    /// Council not found.
    #[error("Council not found: {0}")]
    CouncilNotFound(EntityId),
}

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::DuplicateEntity(_) => Self::Conflict(err.to_string()),
            HierarchyError::ClubNotFound(_) | HierarchyError::CouncilNotFound(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}
