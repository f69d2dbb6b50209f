//! Read-only queries over one snapshot of records.

use std::collections::BTreeMap;

use cosa_shared::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::funding::ExternalFunding;
use super::sources::{SourceOfFund, SourcesOfFundSummary};
use super::status::{ExpenseStatus, ReviewStatus};

/// Records loaded from the persistence service at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBook {
    /// Every expense, in any status.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Every external funding record, in any status.
    #[serde(default)]
    pub external_funding: Vec<ExternalFunding>,
    /// Monthly organization income.
    #[serde(default)]
    pub sources_of_fund: Vec<SourceOfFund>,
}

/// A filtered list of expenses with the sum of their amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseListing<'a> {
    /// Matching expenses.
    pub items: Vec<&'a Expense>,
    /// Sum of `amount` over `items`.
    pub total: Decimal,
}

impl<'a> ExpenseListing<'a> {
    fn newest_date_first(mut items: Vec<&'a Expense>) -> Self {
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        let total = items
            .iter()
            .map(|e| e.amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self { items, total }
    }

    /// Number of listed expenses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecordBook {
    /// Creates a record book.
    #[must_use]
    pub const fn new(
        expenses: Vec<Expense>,
        external_funding: Vec<ExternalFunding>,
        sources_of_fund: Vec<SourceOfFund>,
    ) -> Self {
        Self {
            expenses,
            external_funding,
            sources_of_fund,
        }
    }

    /// Expenses charged to one entity, most recently created first.
    #[must_use]
    pub fn expenses_for(&self, entity: &EntityId) -> Vec<&Expense> {
        let mut items: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| &e.entity_id == entity)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Expenses that reserve funds but have not been paid, newest first.
    #[must_use]
    pub fn fund_bookings(&self) -> ExpenseListing<'_> {
        ExpenseListing::newest_date_first(
            self.expenses
                .iter()
                .filter(|e| e.status.is_open_booking())
                .collect(),
        )
    }

    /// Paid expenses, newest first.
    #[must_use]
    pub fn settled_expenditure(&self) -> ExpenseListing<'_> {
        ExpenseListing::newest_date_first(
            self.expenses
                .iter()
                .filter(|e| e.status.is_settled())
                .collect(),
        )
    }

    /// External funding records for one entity, newest date first.
    #[must_use]
    pub fn external_funding_for(&self, entity: &EntityId) -> Vec<&ExternalFunding> {
        let mut items: Vec<&ExternalFunding> = self
            .external_funding
            .iter()
            .filter(|f| &f.entity_id == entity)
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        items
    }

    /// Sum of approved external funding for one entity.
    #[must_use]
    pub fn external_funding_total(&self, entity: &EntityId) -> Decimal {
        self.external_funding
            .iter()
            .filter(|f| &f.entity_id == entity && f.status == ReviewStatus::Approved)
            .map(|f| f.amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Monthly income with column totals.
    #[must_use]
    pub fn sources_of_fund(&self) -> SourcesOfFundSummary {
        SourcesOfFundSummary::new(self.sources_of_fund.clone())
    }

    /// Number of expenses in each status. Statuses with no expenses are omitted.
    #[must_use]
    pub fn status_counts(&self) -> BTreeMap<ExpenseStatus, usize> {
        let mut counts = BTreeMap::new();
        for expense in &self.expenses {
            *counts.entry(expense.status).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ExpenseType, ItemType};
    use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
    use cosa_shared::types::{ExpenseId, ExternalFundingId};
    use rust_decimal_macros::dec;

    fn created(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, day, 9, 0, 0).unwrap()
    }

    fn expense(entity: &str, day: u32, amount: Decimal, status: ExpenseStatus) -> Expense {
        Expense {
            id: ExpenseId::new(),
            entity_id: entity.into(),
            council_name: None,
            expense_type: ExpenseType::Reimbursement,
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            activity_type: "Event".to_string(),
            item_type: ItemType::Consumable,
            amount,
            paid_by: Some("Treasurer".to_string()),
            paid_to: None,
            description: None,
            bill_url: None,
            requisition_url: None,
            bank: None,
            status,
            remarks: None,
            approved_at: None,
            paid_at: None,
            created_at: created(day),
        }
    }

    fn funding(entity: &str, day: u32, amount: Decimal, status: ReviewStatus) -> ExternalFunding {
        ExternalFunding {
            id: ExternalFundingId::new(),
            entity_id: entity.into(),
            council_name: None,
            source: "Sponsor".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            description: None,
            proof_url: None,
            status,
            created_at: created(day),
        }
    }

    fn book() -> RecordBook {
        RecordBook::new(
            vec![
                expense("gdg", 3, dec!(1000), ExpenseStatus::PendingApproval),
                expense("gdg", 10, dec!(2500), ExpenseStatus::Paid),
                expense("chess", 7, dec!(400), ExpenseStatus::AwaitingBill),
                expense("chess", 12, dec!(800), ExpenseStatus::Rejected),
                expense("gdg", 5, dec!(300), ExpenseStatus::Paid),
                expense("cricket", 20, dec!(6000), ExpenseStatus::PendingPayment),
            ],
            vec![
                funding("gdg", 2, dec!(10000), ReviewStatus::Approved),
                funding("gdg", 9, dec!(5000), ReviewStatus::Pending),
                funding("gdg", 4, dec!(2000), ReviewStatus::Approved),
                funding("chess", 4, dec!(750), ReviewStatus::Rejected),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_expenses_for_newest_created_first() {
        let book = book();
        let amounts: Vec<Decimal> = book
            .expenses_for(&"gdg".into())
            .iter()
            .map(|e| e.amount)
            .collect();
        assert_eq!(amounts, [dec!(2500), dec!(300), dec!(1000)]);
        assert!(book.expenses_for(&"football".into()).is_empty());
    }

    #[test]
    fn test_fund_bookings_are_open_expenses() {
        let book = book();
        let bookings = book.fund_bookings();

        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings.total, dec!(7400));
        assert_eq!(bookings.items[0].entity_id.as_str(), "cricket");
        assert!(bookings.items.iter().all(|e| e.status.is_open_booking()));
    }

    #[test]
    fn test_settled_expenditure_is_paid_only() {
        let book = book();
        let settled = book.settled_expenditure();

        assert_eq!(settled.total, dec!(2800));
        let days: Vec<u32> = settled.items.iter().map(|e| e.date.day()).collect();
        assert_eq!(days, [10, 5]);
    }

    #[test]
    fn test_rejected_counts_nowhere() {
        let book = book();
        let listed = book.fund_bookings().total + book.settled_expenditure().total;
        let all: Decimal = book.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(all - listed, dec!(800));
    }

    #[test]
    fn test_external_funding_for_entity() {
        let book = book();
        let records = book.external_funding_for(&"gdg".into());
        let days: Vec<u32> = records.iter().map(|f| f.date.day()).collect();
        assert_eq!(days, [9, 4, 2]);
    }

    #[test]
    fn test_external_funding_total_counts_approved_only() {
        let book = book();
        assert_eq!(book.external_funding_total(&"gdg".into()), dec!(12000));
        assert_eq!(book.external_funding_total(&"chess".into()), Decimal::ZERO);
    }

    #[test]
    fn test_status_counts() {
        let counts = book().status_counts();
        assert_eq!(counts.get(&ExpenseStatus::Paid), Some(&2));
        assert_eq!(counts.get(&ExpenseStatus::Rejected), Some(&1));
        assert_eq!(counts.get(&ExpenseStatus::Approved), None);
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_empty_book() {
        let book = RecordBook::default();
        assert!(book.fund_bookings().is_empty());
        assert_eq!(book.settled_expenditure().total, Decimal::ZERO);
        assert!(book.status_counts().is_empty());
        assert!(book.sources_of_fund().lines.is_empty());
    }

    #[test]
    fn test_deserialize_with_missing_sections() {
        let book: RecordBook = serde_json::from_str("{}").unwrap();
        assert_eq!(book, RecordBook::default());
    }
}
