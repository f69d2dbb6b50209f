//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units with exact minor-unit precision.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    Inr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Returns the display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Creates a rupee amount.
    #[must_use]
    pub const fn inr(amount: Decimal) -> Self {
        Self::new(amount, Currency::Inr)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    /// Formats as `₹1,55,000` for rupees (lakh/crore grouping) and `$1,234,567`
    /// for other currencies (thousands grouping), with at most two decimals.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = match self.currency {
            Currency::Inr => format_grouped(self.amount.abs()),
            Currency::Usd | Currency::Eur => format_thousands(self.amount.abs()),
        };
        write!(f, "{sign}{}{digits}", self.currency.symbol())
    }
}

/// Formats an amount with Indian digit grouping (`12,34,567.5`).
///
/// The amount is rounded to two decimals, half away from zero, and trailing
/// fractional zeros are dropped.
#[must_use]
pub fn format_grouped(amount: Decimal) -> String {
    format_with(amount, group_indian)
}

/// Formats an amount with thousands grouping (`1,234,567.5`), rounded like
/// [`format_grouped`].
#[must_use]
pub fn format_thousands(amount: Decimal) -> String {
    format_with(amount, group_thousands)
}

fn format_with(amount: Decimal, group: fn(&str) -> String) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Inr);
        assert!(money.is_zero());
        assert!(!money.is_negative());
        assert_eq!(money.currency, Currency::Inr);
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::inr(dec!(-10)).is_negative());
        assert!(!Money::inr(dec!(10)).is_negative());
        assert!(!Money::inr(Decimal::ZERO).is_negative());
    }

    #[rstest]
    #[case(dec!(0), "0")]
    #[case(dec!(999), "999")]
    #[case(dec!(1000), "1,000")]
    #[case(dec!(155000), "1,55,000")]
    #[case(dec!(5000000), "50,00,000")]
    #[case(dec!(123456789), "12,34,56,789")]
    #[case(dec!(17500.50), "17,500.5")]
    #[case(dec!(1234.565), "1,234.57")]
    #[case(dec!(-45000), "-45,000")]
    fn test_format_grouped(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_grouped(amount), expected);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::inr(dec!(155000)).to_string(), "₹1,55,000");
        assert_eq!(Money::inr(dec!(-2500)).to_string(), "-₹2,500");
    }

    #[rstest]
    #[case(Currency::Usd, dec!(1234567), "$1,234,567")]
    #[case(Currency::Eur, dec!(-98765.432), "-€98,765.43")]
    #[case(Currency::Usd, dec!(999), "$999")]
    #[case(Currency::Inr, dec!(1234567), "₹12,34,567")]
    fn test_money_display_groups_by_currency(
        #[case] currency: Currency,
        #[case] amount: Decimal,
        #[case] expected: &str,
    ) {
        assert_eq!(Money::new(amount, currency).to_string(), expected);
    }

    #[rstest]
    #[case(dec!(0), "0")]
    #[case(dec!(100000), "100,000")]
    #[case(dec!(123456789.5), "123,456,789.5")]
    fn test_format_thousands(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_thousands(amount), expected);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Inr.to_string(), "INR");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("INR").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
