//! Whole-unit price representation.
//!
//! Catalog prices carry no minor currency unit: an amount of `4500` is
//! exactly 4500 rubles (or dollars, per the configured [`CurrencyCode`]),
//! never 45.00. Line totals and cart subtotals are plain `i64` sums of
//! these amounts and are formatted with [`format_amount`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be a positive amount, got {0}")]
    NotPositive(i64),
}

/// A price in whole currency units.
///
/// ## Constraints
///
/// - The amount is a positive integer; zero and negative amounts are
///   rejected both by [`Price::new`] and during deserialization.
///
/// ## Examples
///
/// ```
/// use loomworks_core::{CurrencyCode, Price};
///
/// let price = Price::new(4500).unwrap();
/// assert_eq!(price.amount(), 4500);
/// assert_eq!(price.display(CurrencyCode::RUB), "4 500 \u{20bd}");
///
/// assert!(Price::new(0).is_err());
/// assert!(Price::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    /// Create a price from a whole-unit amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `amount <= 0`.
    pub const fn new(amount: i64) -> Result<Self, PriceError> {
        if amount <= 0 {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    /// Get the whole-unit amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Format for display with grouped thousands and a currency symbol,
    /// e.g. `"4 500 ₽"`.
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format_amount(self.0, currency)
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency codes supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// The display symbol, placed after the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "\u{20bd}",
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RUB" => Ok(Self::RUB),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}

/// Error for currency codes outside the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

/// Format a whole-unit amount with grouped thousands and a currency
/// symbol, e.g. `10100` -> `"10 100 ₽"`.
///
/// Totals can legitimately be zero (empty cart), so this accepts any
/// non-negative amount rather than requiring a [`Price`].
#[must_use]
pub fn format_amount(amount: i64, currency: CurrencyCode) -> String {
    format!("{} {}", group_thousands(amount), currency.symbol())
}

/// Insert a space between digit groups of three.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
