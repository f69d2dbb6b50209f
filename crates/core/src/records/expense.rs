//! Expense records and submissions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use cosa_shared::types::{EntityId, ExpenseId};
use cosa_shared::{Action, Viewer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::RecordError;
use super::status::ExpenseStatus;

/// How the expense is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    /// A member paid and is refunded.
    Reimbursement,
    /// The vendor is paid directly.
    PartyPayment,
}

impl ExpenseType {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reimbursement => "reimbursement",
            Self::PartyPayment => "party_payment",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reimbursement" => Ok(Self::Reimbursement),
            "party_payment" => Ok(Self::PartyPayment),
            _ => Err(RecordError::UnknownExpenseType(s.to_string())),
        }
    }
}

/// Whether the purchased item is used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Used up by the activity.
    Consumable,
    /// Kept as an asset.
    NonConsumable,
}

impl ItemType {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consumable => "consumable",
            Self::NonConsumable => "non_consumable",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "consumable" => Ok(Self::Consumable),
            "non_consumable" => Ok(Self::NonConsumable),
            _ => Err(RecordError::UnknownItemType(s.to_string())),
        }
    }
}

/// Bank details of the payee for party payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeAccount {
    /// Name on the account.
    pub account_name: String,
    /// Account number.
    pub account_number: String,
    /// Bank branch.
    pub branch: String,
    /// IFSC code.
    pub ifsc_code: String,
}

/// An expense as stored by the persistence service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Record identifier.
    pub id: ExpenseId,
    /// Club or council the expense is charged to.
    pub entity_id: EntityId,
    /// Council the entity belongs to, if any.
    pub council_name: Option<String>,
    /// Payment route.
    pub expense_type: ExpenseType,
    /// Date of the activity or purchase.
    pub date: NaiveDate,
    /// Kind of activity, e.g. workshop or event.
    pub activity_type: String,
    /// Consumable or not.
    pub item_type: ItemType,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Member who paid, for reimbursements.
    pub paid_by: Option<String>,
    /// Vendor or person paid.
    pub paid_to: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Document store reference for the bill.
    pub bill_url: Option<String>,
    /// Document store reference for the requisition form.
    pub requisition_url: Option<String>,
    /// Payee bank details, for party payments.
    #[serde(default)]
    pub bank: Option<PayeeAccount>,
    /// Lifecycle status.
    pub status: ExpenseStatus,
    /// Reviewer remarks.
    #[serde(default)]
    pub remarks: Option<String>,
    /// When the expense was approved.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    /// When the expense was paid.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// A new expense as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Club or council the expense is charged to.
    pub entity_id: EntityId,
    /// Council the entity belongs to, if any.
    pub council_name: Option<String>,
    /// Payment route.
    pub expense_type: ExpenseType,
    /// Date of the activity or purchase.
    pub date: NaiveDate,
    /// Kind of activity, e.g. workshop or event.
    pub activity_type: String,
    /// Consumable or not.
    pub item_type: ItemType,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Member who paid, for reimbursements.
    pub paid_by: Option<String>,
    /// Vendor or person paid.
    pub paid_to: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Document store reference for the bill.
    pub bill_url: Option<String>,
    /// Document store reference for the requisition form.
    pub requisition_url: Option<String>,
    /// Payee bank details, for party payments.
    pub bank: Option<PayeeAccount>,
}

impl NewExpense {
    /// Stamps the submission into a record awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotPermitted` if the viewer may not submit
    /// expenses, or `RecordError::NonPositiveAmount` for a zero or negative amount.
    pub fn into_record(self, viewer: &Viewer) -> Result<Expense, RecordError> {
        if !viewer.can(Action::SubmitExpense) {
            return Err(RecordError::NotPermitted {
                role: viewer.role,
                action: Action::SubmitExpense,
            });
        }
        if self.amount <= Decimal::ZERO {
            return Err(RecordError::NonPositiveAmount(self.amount));
        }

        let expense = Expense {
            id: ExpenseId::new(),
            entity_id: self.entity_id,
            council_name: self.council_name,
            expense_type: self.expense_type,
            date: self.date,
            activity_type: self.activity_type,
            item_type: self.item_type,
            amount: self.amount,
            paid_by: self.paid_by,
            paid_to: self.paid_to,
            description: self.description,
            bill_url: self.bill_url,
            requisition_url: self.requisition_url,
            bank: self.bank,
            status: ExpenseStatus::PendingApproval,
            remarks: None,
            approved_at: None,
            paid_at: None,
            created_at: Utc::now(),
        };

        info!(
            expense_id = %expense.id,
            entity = %expense.entity_id,
            amount = %expense.amount,
            submitted_by = %viewer.user_id,
            "Expense submitted"
        );

        Ok(expense)
    }
}
