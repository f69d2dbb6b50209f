//! Dashboard read-models.
//!
//! Every figure here is computed from one organization snapshot; none of these
//! types is stored.

use std::collections::BTreeMap;

use cosa_shared::types::EntityId;
use cosa_shared::{Action, Viewer};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::{BudgetCategory, BudgetSummary};
use crate::hierarchy::CouncilType;
use crate::records::{
    Expense, ExpenseListing, ExpenseStatus, ExternalFunding, SourcesOfFundSummary,
};

/// The landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Organization name.
    pub organization: String,
    /// Academic year label.
    pub academic_year: String,
    /// Headline numbers.
    pub quick_stats: QuickStats,
    /// Organization-wide summary.
    pub overview: BudgetSummary,
    /// One card per council, in snapshot order.
    pub councils: Vec<CouncilCard>,
    /// One tile per independent club.
    pub independent_clubs: Vec<ClubTile>,
    /// Organization-level budget not attributed to any club.
    pub misc: BudgetSummary,
}

/// Headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    /// Number of councils.
    pub council_count: usize,
    /// Clubs across councils plus independent clubs.
    pub club_count: usize,
    /// Utilization of the organization total, one decimal place.
    pub overall_usage_percent: Decimal,
}

/// Council card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouncilCard {
    /// Council slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Classification.
    pub council_type: CouncilType,
    /// Number of member clubs.
    pub club_count: usize,
    /// Summary of the derived council total.
    pub summary: BudgetSummary,
}

/// A club in a grid or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubTile {
    /// Club slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Summary of the club total.
    pub summary: BudgetSummary,
}

/// One row of a budget table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetTableRow {
    /// Category.
    pub category: BudgetCategory,
    /// Display label.
    pub label: &'static str,
    /// Figures for the category.
    pub summary: BudgetSummary,
}

/// A council page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouncilDetailView {
    /// Council slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Classification.
    pub council_type: CouncilType,
    /// Summary of the derived council total.
    pub summary: BudgetSummary,
    /// Derived council budget by category.
    pub budget_table: Vec<BudgetTableRow>,
    /// Member clubs.
    pub clubs: Vec<ClubTile>,
}

/// What the current viewer may do on a club page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// May submit an expense.
    pub can_submit_expense: bool,
    /// May record external funding.
    pub can_submit_funding: bool,
    /// May approve or reject expenses.
    pub can_review: bool,
}

impl Capabilities {
    /// Capabilities of a signed-in viewer; anonymous visitors get none.
    #[must_use]
    pub fn for_viewer(viewer: Option<&Viewer>) -> Self {
        viewer.map_or_else(Self::default, |v| Self {
            can_submit_expense: v.can(Action::SubmitExpense),
            can_submit_funding: v.can(Action::SubmitExternalFunding),
            can_review: v.can(Action::ReviewExpense),
        })
    }
}

/// A club page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubDetailView {
    /// Club slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Parent council slug; `None` for independent clubs.
    pub council_id: Option<EntityId>,
    /// Parent council name, or "Independent Club".
    pub parent_label: String,
    /// Summary of the club total.
    pub summary: BudgetSummary,
    /// Club budget by category.
    pub budget_table: Vec<BudgetTableRow>,
    /// The club's expenses, most recently created first.
    pub expenses: Vec<Expense>,
    /// The club's external funding records, newest first.
    pub external_funding: Vec<ExternalFunding>,
    /// Sum of approved external funding records.
    pub approved_external_funding: Decimal,
    /// What the viewer may do.
    pub capabilities: Capabilities,
}

/// Organization-wide finance pages built from the record book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceView<'a> {
    /// Expenses still holding funds.
    pub fund_bookings: ExpenseListing<'a>,
    /// Paid expenses.
    pub settled_expenditure: ExpenseListing<'a>,
    /// Monthly income.
    pub sources_of_fund: SourcesOfFundSummary,
    /// Expenses per status.
    pub status_counts: BTreeMap<ExpenseStatus, usize>,
}
