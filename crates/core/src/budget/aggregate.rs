//! Budget roll-up and derived metrics.
//!
//! Every view that shows a remaining balance or a utilization percentage goes
//! through [`Aggregator`]; no other module repeats these formulas.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{BudgetData, BudgetRow, BudgetSummary};

/// Default utilization threshold, in percent, below which an entity is healthy.
pub const DEFAULT_HEALTH_THRESHOLD: Decimal = dec!(70);

/// Utilization threshold used to classify an entity as healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPolicy {
    /// Exclusive upper bound on `percent_used` for a healthy entity.
    pub threshold_percent: Decimal,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_HEALTH_THRESHOLD,
        }
    }
}

impl HealthPolicy {
    /// Creates a policy from a whole-number percentage.
    #[must_use]
    pub fn from_percent(threshold_percent: u32) -> Self {
        Self {
            threshold_percent: Decimal::from(threshold_percent),
        }
    }

    /// Returns true if `percent_used` is strictly below the threshold.
    #[must_use]
    pub fn is_healthy(&self, percent_used: Decimal) -> bool {
        percent_used < self.threshold_percent
    }
}

/// Stateless budget aggregation.
pub struct Aggregator;

impl Aggregator {
    /// Sums budgets field by field, category by category.
    ///
    /// An empty input yields [`BudgetData::ZERO`]. The result does not depend on
    /// input order. Sums saturate at the bounds of [`Decimal`].
    #[must_use]
    pub fn sum<'a, I>(children: I) -> BudgetData
    where
        I: IntoIterator<Item = &'a BudgetData>,
    {
        children
            .into_iter()
            .fold(BudgetData::ZERO, |acc, child| acc + *child)
    }

    /// Remaining balance: allocated - expenditure - booking + external funding.
    ///
    /// Not clamped; a negative result means the entity is overspent. Saturates at
    /// the bounds of [`Decimal`].
    #[must_use]
    pub fn remaining(row: &BudgetRow) -> Decimal {
        row.funds_allocated
            .saturating_sub(row.expenditure)
            .saturating_sub(row.fund_booking)
            .saturating_add(row.external_funding)
    }

    /// Percent of the allocation spent or booked, rounded to one decimal place.
    ///
    /// Returns zero when nothing has been allocated. A ratio too large for
    /// [`Decimal`] saturates to `Decimal::MAX` (or `MIN` when the signs differ).
    #[must_use]
    pub fn percent_used(row: &BudgetRow) -> Decimal {
        if row.funds_allocated.is_zero() {
            return Decimal::ZERO;
        }

        let used = row.expenditure.saturating_add(row.fund_booking);
        let saturated = if used.is_sign_negative() == row.funds_allocated.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        };

        used.checked_div(row.funds_allocated)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(saturated, |percent| {
                percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            })
    }

    /// Health check against the default 70% threshold.
    #[must_use]
    pub fn is_healthy(percent_used: Decimal) -> bool {
        HealthPolicy::default().is_healthy(percent_used)
    }

    /// Derives the full summary of one row.
    #[must_use]
    pub fn summarize(row: &BudgetRow, policy: &HealthPolicy) -> BudgetSummary {
        let remaining = Self::remaining(row);
        let percent_used = Self::percent_used(row);

        BudgetSummary {
            funds_allocated: row.funds_allocated,
            expenditure: row.expenditure,
            fund_booking: row.fund_booking,
            external_funding: row.external_funding,
            remaining,
            percent_used,
            is_healthy: policy.is_healthy(percent_used),
            is_overspent: remaining < Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_formula() {
        let row = BudgetRow::new(dec!(100), dec!(30), dec!(20), dec!(10));
        assert_eq!(Aggregator::remaining(&row), dec!(60));
    }

    #[test]
    fn test_remaining_may_go_negative() {
        let row = BudgetRow::new(dec!(100), dec!(90), dec!(40), dec!(0));
        assert_eq!(Aggregator::remaining(&row), dec!(-30));
    }

    #[test]
    fn test_percent_used_zero_allocation() {
        let row = BudgetRow::new(dec!(0), dec!(50), dec!(0), dec!(0));
        assert_eq!(Aggregator::percent_used(&row), Decimal::ZERO);
    }

    #[test]
    fn test_percent_used_boundary_is_unhealthy() {
        let row = BudgetRow::new(dec!(200), dec!(100), dec!(40), dec!(0));
        let percent = Aggregator::percent_used(&row);

        assert_eq!(percent, dec!(70.0));
        assert!(!Aggregator::is_healthy(percent));
        assert!(Aggregator::is_healthy(dec!(69.9)));
    }

    #[test]
    fn test_percent_used_rounds_half_away_from_zero() {
        // 1 / 16 * 100 = 6.25
        let row = BudgetRow::new(dec!(16), dec!(1), dec!(0), dec!(0));
        assert_eq!(Aggregator::percent_used(&row), dec!(6.3));

        // 2 / 3 * 100 = 66.666...
        let row = BudgetRow::new(dec!(3), dec!(1), dec!(1), dec!(0));
        assert_eq!(Aggregator::percent_used(&row), dec!(66.7));
    }

    #[test]
    fn test_percent_used_ignores_external_funding() {
        let row = BudgetRow::new(dec!(1000), dec!(500), dec!(0), dec!(900));
        assert_eq!(Aggregator::percent_used(&row), dec!(50.0));
    }

    #[test]
    fn test_custom_health_policy() {
        let policy = HealthPolicy::from_percent(80);
        assert!(policy.is_healthy(dec!(79.9)));
        assert!(!policy.is_healthy(dec!(80)));
        assert_eq!(HealthPolicy::default().threshold_percent, dec!(70));
    }

    #[test]
    fn test_summarize_flags_overspend() {
        let row = BudgetRow::new(dec!(1000), dec!(900), dec!(200), dec!(50));
        let summary = Aggregator::summarize(&row, &HealthPolicy::default());

        assert_eq!(summary.remaining, dec!(-50));
        assert_eq!(summary.percent_used, dec!(110.0));
        assert!(summary.is_overspent);
        assert!(!summary.is_healthy);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        assert_eq!(Aggregator::sum(std::iter::empty()), BudgetData::ZERO);
    }

    #[test]
    fn test_percent_used_saturates_on_tiny_allocation() {
        // 1e22 / 1e-7 * 100 does not fit in a Decimal.
        let row = BudgetRow::new(
            Decimal::new(1, 7),
            Decimal::from_i128_with_scale(10_i128.pow(22), 0),
            dec!(0),
            dec!(0),
        );
        let summary = Aggregator::summarize(&row, &HealthPolicy::default());

        assert_eq!(summary.percent_used, Decimal::MAX);
        assert!(!summary.is_healthy);
        assert!(summary.is_overspent);
    }

    #[test]
    fn test_percent_used_saturates_negative_for_negative_allocation() {
        let row = BudgetRow::new(
            -Decimal::new(1, 7),
            Decimal::from_i128_with_scale(10_i128.pow(22), 0),
            dec!(0),
            dec!(0),
        );
        assert_eq!(Aggregator::percent_used(&row), Decimal::MIN);
    }

    #[test]
    fn test_sum_saturates_at_decimal_max() {
        let row = BudgetRow::new(Decimal::MAX, dec!(0), dec!(0), dec!(0));
        let big = BudgetData::from_categories(row, BudgetRow::ZERO);
        let total = Aggregator::sum([&big, &big]);

        assert_eq!(total.total.funds_allocated, Decimal::MAX);
        assert_eq!(total.particulars.funds_allocated, Decimal::MAX);
    }

    #[test]
    fn test_remaining_saturates() {
        let row = BudgetRow::new(Decimal::MIN, Decimal::MAX, Decimal::MAX, dec!(0));
        assert_eq!(Aggregator::remaining(&row), Decimal::MIN);

        let row = BudgetRow::new(Decimal::MAX, dec!(0), dec!(0), Decimal::MAX);
        assert_eq!(Aggregator::remaining(&row), Decimal::MAX);
    }
}
