//! Budget data types.

use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial figures for one budget category of one entity.
///
/// All amounts are exact decimals in the organization's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetRow {
    /// Funds allocated to the entity.
    pub funds_allocated: Decimal,
    /// Money already spent.
    pub expenditure: Decimal,
    /// Money earmarked but not yet disbursed.
    pub fund_booking: Decimal,
    /// Money received from sponsors or grants.
    pub external_funding: Decimal,
}

impl BudgetRow {
    /// A row with every figure zero.
    pub const ZERO: Self = Self {
        funds_allocated: Decimal::ZERO,
        expenditure: Decimal::ZERO,
        fund_booking: Decimal::ZERO,
        external_funding: Decimal::ZERO,
    };

    /// Creates a row from its four figures.
    #[must_use]
    pub const fn new(
        funds_allocated: Decimal,
        expenditure: Decimal,
        fund_booking: Decimal,
        external_funding: Decimal,
    ) -> Self {
        Self {
            funds_allocated,
            expenditure,
            fund_booking,
            external_funding,
        }
    }

    /// Returns the value of one field.
    #[must_use]
    pub const fn get(&self, field: BudgetField) -> Decimal {
        match field {
            BudgetField::FundsAllocated => self.funds_allocated,
            BudgetField::Expenditure => self.expenditure,
            BudgetField::FundBooking => self.fund_booking,
            BudgetField::ExternalFunding => self.external_funding,
        }
    }
}

impl Add for BudgetRow {
    type Output = Self;

    /// Field-wise sum, saturating at the bounds of [`Decimal`].
    fn add(self, rhs: Self) -> Self {
        Self {
            funds_allocated: self.funds_allocated.saturating_add(rhs.funds_allocated),
            expenditure: self.expenditure.saturating_add(rhs.expenditure),
            fund_booking: self.fund_booking.saturating_add(rhs.fund_booking),
            external_funding: self.external_funding.saturating_add(rhs.external_funding),
        }
    }
}

/// The four money fields of a [`BudgetRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetField {
    /// `funds_allocated`
    FundsAllocated,
    /// `expenditure`
    Expenditure,
    /// `fund_booking`
    FundBooking,
    /// `external_funding`
    ExternalFunding,
}

impl BudgetField {
    /// Every field, in row order.
    pub const ALL: [Self; 4] = [
        Self::FundsAllocated,
        Self::Expenditure,
        Self::FundBooking,
        Self::ExternalFunding,
    ];
}

/// Budget classification shared by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Activities, events, and consumables.
    Particulars,
    /// Durable equipment purchases.
    Equipment,
    /// Entity-wide total.
    Total,
}

impl BudgetCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Particulars, Self::Equipment, Self::Total];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Particulars => "Particulars",
            Self::Equipment => "Equipment",
            Self::Total => "Total",
        }
    }
}

/// The budget of one entity: one row per [`BudgetCategory`].
///
/// `total` is expected to equal `particulars + equipment`; that convention is
/// not enforced here. Use [`BudgetData::total_mismatches`] to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetData {
    /// Particulars category.
    pub particulars: BudgetRow,
    /// Equipment category.
    pub equipment: BudgetRow,
    /// Total across categories.
    pub total: BudgetRow,
}

impl BudgetData {
    /// Budget data with every figure zero; the identity for summation.
    pub const ZERO: Self = Self {
        particulars: BudgetRow::ZERO,
        equipment: BudgetRow::ZERO,
        total: BudgetRow::ZERO,
    };

    /// Builds budget data from its category rows, deriving `total`.
    #[must_use]
    pub fn from_categories(particulars: BudgetRow, equipment: BudgetRow) -> Self {
        Self {
            particulars,
            equipment,
            total: particulars + equipment,
        }
    }

    /// Returns the row for a category.
    #[must_use]
    pub const fn row(&self, category: BudgetCategory) -> &BudgetRow {
        match category {
            BudgetCategory::Particulars => &self.particulars,
            BudgetCategory::Equipment => &self.equipment,
            BudgetCategory::Total => &self.total,
        }
    }

    /// Iterates over `(category, row)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (BudgetCategory, &BudgetRow)> {
        BudgetCategory::ALL.into_iter().map(|c| (c, self.row(c)))
    }

    /// Lists every field where `total` differs from the sum of the other categories.
    #[must_use]
    pub fn total_mismatches(&self) -> Vec<TotalMismatch> {
        let expected = self.particulars + self.equipment;
        BudgetField::ALL
            .into_iter()
            .filter(|&field| expected.get(field) != self.total.get(field))
            .map(|field| TotalMismatch {
                field,
                expected: expected.get(field),
                actual: self.total.get(field),
            })
            .collect()
    }

    /// Returns true if `total` equals the sum of the other categories.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_mismatches().is_empty()
    }
}

impl Add for BudgetData {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            particulars: self.particulars + rhs.particulars,
            equipment: self.equipment + rhs.equipment,
            total: self.total + rhs.total,
        }
    }
}

/// A field where a budget's `total` row breaks the summation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalMismatch {
    /// Field that differs.
    pub field: BudgetField,
    /// Sum of the non-total categories.
    pub expected: Decimal,
    /// Value recorded in `total`.
    pub actual: Decimal,
}

/// Derived figures for one budget row, in the shape every dashboard card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Funds allocated.
    pub funds_allocated: Decimal,
    /// Expenditure.
    pub expenditure: Decimal,
    /// Fund booking.
    pub fund_booking: Decimal,
    /// External funding.
    pub external_funding: Decimal,
    /// Remaining balance; negative when overspent.
    pub remaining: Decimal,
    /// Percent of the allocation spent or booked, one decimal place.
    pub percent_used: Decimal,
    /// Utilization is below the health threshold.
    pub is_healthy: bool,
    /// Remaining balance is below zero.
    pub is_overspent: bool,
}

impl BudgetSummary {
    /// Summarizes one row under the given health policy.
    #[must_use]
    pub fn of(row: &BudgetRow, policy: &super::HealthPolicy) -> Self {
        super::Aggregator::summarize(row, policy)
    }
}
