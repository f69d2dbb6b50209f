//! Builds dashboard read-models from an organization snapshot.

use cosa_shared::Viewer;
use cosa_shared::types::EntityId;
use rust_decimal::Decimal;
use tracing::debug;

use crate::budget::{BudgetData, BudgetSummary, HealthPolicy};
use crate::hierarchy::{Club, ClubParent, Council, Organization};
use crate::records::RecordBook;

use super::error::DashboardError;
use super::types::{
    BudgetTableRow, Capabilities, ClubDetailView, ClubTile, CouncilCard, CouncilDetailView,
    DashboardView, FinanceView, QuickStats,
};

/// Stateless dashboard assembly.
pub struct DashboardService;

impl DashboardService {
    /// Builds the landing page.
    #[must_use]
    pub fn build(org: &Organization, policy: &HealthPolicy) -> DashboardView {
        let overview = BudgetSummary::of(&org.total().total, policy);

        let councils: Vec<CouncilCard> = org
            .councils()
            .iter()
            .map(|council| CouncilCard {
                id: council.id().clone(),
                name: council.name().to_string(),
                council_type: council.council_type(),
                club_count: council.clubs().len(),
                summary: BudgetSummary::of(&council.budget().total, policy),
            })
            .collect();

        let view = DashboardView {
            organization: org.name().to_string(),
            academic_year: org.academic_year().to_string(),
            quick_stats: QuickStats {
                council_count: org.council_count(),
                club_count: org.club_count(),
                overall_usage_percent: overview.percent_used,
            },
            overview,
            councils,
            independent_clubs: Self::tiles(org.independent_clubs(), policy),
            misc: BudgetSummary::of(&org.misc().total, policy),
        };

        debug!(
            councils = view.quick_stats.council_count,
            clubs = view.quick_stats.club_count,
            usage = %view.quick_stats.overall_usage_percent,
            "Dashboard built"
        );

        view
    }

    /// Builds a council page.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::CouncilNotFound` if no council has this slug.
    pub fn council_detail(
        org: &Organization,
        id: &EntityId,
        policy: &HealthPolicy,
    ) -> Result<CouncilDetailView, DashboardError> {
        let council: &Council = org
            .find_council(id)
            .ok_or_else(|| DashboardError::CouncilNotFound(id.clone()))?;

        Ok(CouncilDetailView {
            id: council.id().clone(),
            name: council.name().to_string(),
            council_type: council.council_type(),
            summary: BudgetSummary::of(&council.budget().total, policy),
            budget_table: Self::budget_table(council.budget(), policy),
            clubs: Self::tiles(council.clubs(), policy),
        })
    }

    /// Builds a club page.
    ///
    /// Without a record book the expense and funding lists are empty. Without a
    /// viewer every capability is off.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::ClubNotFound` if no club has this slug.
    pub fn club_detail(
        org: &Organization,
        id: &EntityId,
        policy: &HealthPolicy,
        records: Option<&RecordBook>,
        viewer: Option<&Viewer>,
    ) -> Result<ClubDetailView, DashboardError> {
        let location = org
            .find_club(id)
            .ok_or_else(|| DashboardError::ClubNotFound(id.clone()))?;
        let club = location.club;

        let council_id = match location.parent {
            ClubParent::Council(council) => Some(council.id().clone()),
            ClubParent::Independent => None,
        };

        let (expenses, external_funding, approved_external_funding) = match records {
            Some(book) => (
                book.expenses_for(&club.id).into_iter().cloned().collect(),
                book.external_funding_for(&club.id)
                    .into_iter()
                    .cloned()
                    .collect(),
                book.external_funding_total(&club.id),
            ),
            None => (Vec::new(), Vec::new(), Decimal::ZERO),
        };

        Ok(ClubDetailView {
            id: club.id.clone(),
            name: club.name.clone(),
            council_id,
            parent_label: location.parent.label().to_string(),
            summary: BudgetSummary::of(&club.budget.total, policy),
            budget_table: Self::budget_table(&club.budget, policy),
            expenses,
            external_funding,
            approved_external_funding,
            capabilities: Capabilities::for_viewer(viewer),
        })
    }

    /// Builds the fund booking, expenditure, and income pages.
    #[must_use]
    pub fn finance(records: &RecordBook) -> FinanceView<'_> {
        FinanceView {
            fund_bookings: records.fund_bookings(),
            settled_expenditure: records.settled_expenditure(),
            sources_of_fund: records.sources_of_fund(),
            status_counts: records.status_counts(),
        }
    }

    fn tiles(clubs: &[Club], policy: &HealthPolicy) -> Vec<ClubTile> {
        clubs
            .iter()
            .map(|club| ClubTile {
                id: club.id.clone(),
                name: club.name.clone(),
                summary: BudgetSummary::of(&club.budget.total, policy),
            })
            .collect()
    }

    fn budget_table(budget: &BudgetData, policy: &HealthPolicy) -> Vec<BudgetTableRow> {
        budget
            .rows()
            .map(|(category, row)| BudgetTableRow {
                category,
                label: category.label(),
                summary: BudgetSummary::of(row, policy),
            })
            .collect()
    }
}
