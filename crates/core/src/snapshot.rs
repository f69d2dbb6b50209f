//! The JSON hand-off format between the persistence service and the dashboard.

use cosa_shared::AppResult;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::hierarchy::{Organization, OrganizationSnapshot};
use crate::records::RecordBook;

/// One consistent read of budgets and records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Organization tree with authoritative club budgets.
    pub organization: OrganizationSnapshot,
    /// Transactional records.
    #[serde(default)]
    pub records: RecordBook,
}

impl Snapshot {
    /// Wraps an organization with no records.
    #[must_use]
    pub fn without_records(organization: OrganizationSnapshot) -> Self {
        Self {
            organization,
            records: RecordBook::default(),
        }
    }

    /// Relabels the snapshot with the given academic year.
    #[must_use]
    pub fn with_academic_year(mut self, academic_year: &str) -> Self {
        academic_year.clone_into(&mut self.organization.academic_year);
        self
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Snapshot` if the document is malformed.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Snapshot` if serialization fails.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Derives every aggregate and returns the organization with its records.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Conflict` if an entity slug is used twice.
    pub fn load(self) -> AppResult<(Organization, RecordBook)> {
        let organization = Organization::from_snapshot(self.organization)?;

        let inconsistent = organization
            .clubs()
            .filter(|loc| !loc.club.budget.is_consistent())
            .count();
        if inconsistent > 0 {
            warn!(
                clubs = inconsistent,
                "Club totals differ from particulars plus equipment"
            );
        }

        info!(
            organization = organization.name(),
            clubs = organization.club_count(),
            expenses = self.records.expenses.len(),
            "Snapshot loaded"
        );

        Ok((organization, self.records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{BudgetData, BudgetRow};
    use crate::fixture::sample_snapshot;
    use crate::hierarchy::Club;
    use cosa_shared::AppError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_fixture() {
        let (org, records) = Snapshot::without_records(sample_snapshot()).load().unwrap();
        assert_eq!(org.club_count(), 39);
        assert_eq!(records, RecordBook::default());
    }

    #[test]
    fn test_json_roundtrip_keeps_derived_figures() {
        let snapshot = Snapshot::without_records(sample_snapshot());
        let json = snapshot.to_json_pretty().unwrap();
        let (org, _) = Snapshot::from_json(&json).unwrap().load().unwrap();
        let (expected, _) = snapshot.load().unwrap();
        assert_eq!(org, expected);
    }

    #[test]
    fn test_records_section_is_optional() {
        let json = r#"{
            "organization": {
                "name": "CoSA",
                "academic_year": "2025-26",
                "councils": []
            }
        }"#;
        let (org, records) = Snapshot::from_json(json).unwrap().load().unwrap();
        assert_eq!(org.club_count(), 0);
        assert!(records.expenses.is_empty());
    }

    #[test]
    fn test_academic_year_label_reaches_dashboard() {
        let (org, _) = Snapshot::without_records(sample_snapshot())
            .with_academic_year("2026-27")
            .load()
            .unwrap();
        let view = crate::dashboard::DashboardService::build(
            &org,
            &crate::budget::HealthPolicy::default(),
        );

        assert_eq!(org.academic_year(), "2026-27");
        assert_eq!(view.academic_year, "2026-27");
    }

    #[test]
    fn test_malformed_json_is_snapshot_error() {
        let err = Snapshot::from_json("{\"organization\": 3}").unwrap_err();
        assert!(matches!(err, AppError::Snapshot(_)));
    }

    #[test]
    fn test_extreme_figures_load_and_build() {
        let json = r#"{
            "organization": {
                "name": "CoSA",
                "academic_year": "2025-26",
                "councils": [],
                "independent_clubs": [{
                    "id": "gdg",
                    "name": "GDG",
                    "budget": {
                        "particulars": {
                            "funds_allocated": "0.0000001",
                            "expenditure": "50000000000000000000000",
                            "fund_booking": "0",
                            "external_funding": "0"
                        },
                        "equipment": {
                            "funds_allocated": "0",
                            "expenditure": "0",
                            "fund_booking": "0",
                            "external_funding": "0"
                        },
                        "total": {
                            "funds_allocated": "0.0000001",
                            "expenditure": "50000000000000000000000",
                            "fund_booking": "0",
                            "external_funding": "0"
                        }
                    }
                }]
            }
        }"#;
        let (org, _) = Snapshot::from_json(json).unwrap().load().unwrap();
        let view = crate::dashboard::DashboardService::build(
            &org,
            &crate::budget::HealthPolicy::default(),
        );

        assert_eq!(view.overview.percent_used, rust_decimal::Decimal::MAX);
        assert!(!view.overview.is_healthy);
        assert!(view.overview.is_overspent);
    }

    #[test]
    fn test_duplicate_slug_is_conflict() {
        let mut organization = sample_snapshot();
        organization.independent_clubs.push(Club::new(
            "gdg",
            "GDG Again",
            BudgetData::from_categories(
                BudgetRow::new(dec!(1000), dec!(0), dec!(0), dec!(0)),
                BudgetRow::ZERO,
            ),
        ));

        let err = Snapshot::without_records(organization).load().unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
