//! Type-safe money representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a money value from an amount in the smallest currency unit
    /// (e.g., cents for USD).
    #[must_use]
    pub fn from_minor_units(minor: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(minor, 2),
            currency_code,
        }
    }
}

impl fmt::Display for Money {
    /// Format for display (e.g., "$19.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency's display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_decimals() {
        let price = Money::from_minor_units(19990, CurrencyCode::USD);
        assert_eq!(price.to_string(), "$199.90");

        let whole = Money::new(Decimal::new(45, 0), CurrencyCode::EUR);
        assert_eq!(whole.to_string(), "€45.00");
    }

    #[test]
    fn test_symbols_and_codes() {
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
        assert_eq!(CurrencyCode::CAD.symbol(), "$");
        assert_eq!(CurrencyCode::AUD.code(), "AUD");
    }

    #[test]
    fn test_serializes_amount_as_string() {
        let price = Money::from_minor_units(14990, CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":"149.90","currency_code":"USD"}"#);

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
