//! Transactional records supplied by the persistence service.
//!
//! Records are read-only snapshots here. Reconciling them into the
//! authoritative budget figures is the persistence service's job.
//!
//! # Modules
//!
//! - `status` - Lifecycle statuses for expenses and reviewed records
//! - `expense` - Expense records and expense submissions
//! - `funding` - External funding records and submissions
//! - `sources` - Monthly sources of fund
//! - `book` - Filtered reads over a record snapshot

pub mod book;
pub mod error;
pub mod expense;
pub mod funding;
pub mod sources;
pub mod status;

pub use book::{ExpenseListing, RecordBook};
pub use error::RecordError;
pub use expense::{Expense, ExpenseType, ItemType, NewExpense, PayeeAccount};
pub use funding::{ExternalFunding, NewExternalFunding};
pub use sources::{Month, SourceOfFund, SourcesOfFundSummary};
pub use status::{ExpenseStatus, ReviewStatus};
