//! Monthly sources of fund.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use cosa_shared::types::SourceOfFundId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month(NaiveDate);

impl Month {
    /// Creates a month, returning `None` for an invalid month number.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let well_formed = trimmed.len() == 7 && trimmed.as_bytes()[4] == b'-';
        if !well_formed {
            return Err(RecordError::InvalidMonth(s.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| RecordError::InvalidMonth(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// One month of organization income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOfFund {
    /// Record identifier.
    pub id: SourceOfFundId,
    /// Month the income belongs to.
    pub month: Month,
    /// Student fees collected.
    pub fees_collected: Decimal,
    /// Sponsorship income.
    pub sponsorship: Decimal,
    /// Any other income.
    pub others: Decimal,
}

impl SourceOfFund {
    /// Income from all three columns.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.fees_collected
            .saturating_add(self.sponsorship)
            .saturating_add(self.others)
    }
}

/// Monthly income lines with column totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcesOfFundSummary {
    /// Lines, newest month first.
    pub lines: Vec<SourceOfFund>,
    /// Sum of `fees_collected`.
    pub fees_collected: Decimal,
    /// Sum of `sponsorship`.
    pub sponsorship: Decimal,
    /// Sum of `others`.
    pub others: Decimal,
    /// Sum of every line's total.
    pub total: Decimal,
}

impl SourcesOfFundSummary {
    /// Builds a summary, ordering lines newest month first.
    #[must_use]
    pub fn new(mut lines: Vec<SourceOfFund>) -> Self {
        lines.sort_by(|a, b| b.month.cmp(&a.month));

        let fees_collected = Self::column(&lines, |l| l.fees_collected);
        let sponsorship = Self::column(&lines, |l| l.sponsorship);
        let others = Self::column(&lines, |l| l.others);
        let total = Self::column(&lines, SourceOfFund::total);

        Self {
            lines,
            fees_collected,
            sponsorship,
            others,
            total,
        }
    }

    fn column(lines: &[SourceOfFund], value: impl Fn(&SourceOfFund) -> Decimal) -> Decimal {
        lines
            .iter()
            .map(value)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
