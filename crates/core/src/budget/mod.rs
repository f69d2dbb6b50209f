//! Budget figures, roll-up, and derived metrics.

pub mod aggregate;
pub mod types;


pub use aggregate::{Aggregator, DEFAULT_HEALTH_THRESHOLD, HealthPolicy};
pub use types::{BudgetCategory, BudgetData, BudgetField, BudgetRow, BudgetSummary, TotalMismatch};
