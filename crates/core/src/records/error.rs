//! Record error types.

use cosa_shared::{Action, AppError, Role};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while parsing or submitting records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Status string outside the fixed enumeration.
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Expense type string outside the fixed enumeration.
    #[error("Unknown expense type: {0}")]
    UnknownExpenseType(String),

    /// Item type string outside the fixed enumeration.
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Month not in `YYYY-MM` form.
    #[error("Invalid month {0}, expected YYYY-MM")]
    InvalidMonth(String),

    /// Submitted amount is zero or negative.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// The submitting user's role does not allow the action.
    #[error("Role {role} may not {action:?}")]
    NotPermitted {
        /// The user's role.
        role: Role,
        /// The attempted action.
        action: Action,
    },
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::NotPermitted { .. } => Self::Forbidden(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
