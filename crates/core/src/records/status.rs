//! Lifecycle statuses for transactional records.
//!
//! Expenses move through the full payment lifecycle:
//! - pending_approval → approved → awaiting_bill → pending_payment → paid
//! - any open status → rejected
//!
//! Other reviewed records (external funding) use the shorter
//! pending → approved | rejected lifecycle. Transitions themselves are owned
//! by the persistence service; these types only classify a record's state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Expense status in the approval and payment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Submitted and waiting for a reviewer.
    PendingApproval,
    /// Approved; funds are committed.
    Approved,
    /// Approved, waiting for the bill to be uploaded.
    AwaitingBill,
    /// Bill received, payment not yet made.
    PendingPayment,
    /// Paid out.
    Paid,
    /// Rejected by a reviewer.
    Rejected,
}

impl ExpenseStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::PendingApproval,
        Self::Approved,
        Self::AwaitingBill,
        Self::PendingPayment,
        Self::Paid,
        Self::Rejected,
    ];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::AwaitingBill => "awaiting_bill",
            Self::PendingPayment => "pending_payment",
            Self::Paid => "paid",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PendingApproval => "Pending Approval",
            Self::Approved => "Approved",
            Self::AwaitingBill => "Awaiting Bill",
            Self::PendingPayment => "Pending Payment",
            Self::Paid => "Paid",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns true if the expense reserves funds without having been paid.
    #[must_use]
    pub const fn is_open_booking(&self) -> bool {
        matches!(
            self,
            Self::PendingApproval | Self::Approved | Self::AwaitingBill | Self::PendingPayment
        )
    }

    /// Returns true if the money has left the account.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Returns true if the expense will not change again.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Paid | Self::Rejected)
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::UnknownStatus(s.to_string()))
    }
}

/// Status of records with a single review step.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Waiting for review.
    #[default]
    Pending,
    /// Accepted.
    Approved,
    /// Declined.
    Rejected,
}

impl ReviewStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::UnknownStatus(s.to_string()))
    }
}
