//! Dashboard error types.

use cosa_shared::AppError;
use cosa_shared::types::EntityId;
use thiserror::Error;

/// Errors raised while building a detail page.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No club with this slug.
    #[error("Club not found: {0}")]
    ClubNotFound(EntityId),

    /// No council with this slug.
    #[error("Council not found: {0}")]
    CouncilNotFound(EntityId),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        Self::NotFound(err.to_string())
    }
}
