//! Value objects for the storefront core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Money value object: an exact decimal amount in a named currency.
///
/// Decimal arithmetic keeps cart math exact (45.50 x 2 == 91.00, never
/// 90.999...), which the cart and ledger invariants depend on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self { amount, currency: currency.to_string() }
    }

    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, "USD")
    }

    pub fn zero(currency: &str) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch);
        }
        Ok(Money::new(self.amount + other.amount, &self.currency))
    }

    pub fn multiply(&self, qty: u32) -> Money {
        Money::new(self.amount * Decimal::from(qty), &self.currency)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero("USD")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("currency mismatch")]
    CurrencyMismatch,
}
