//! Monetary amounts with precise decimal arithmetic
//!
//! All amounts in the system (rebuild value, contents value, premium) are
//! euro amounts persisted as `NUMERIC(12,2)`. [`Money`] enforces that shape at
//! construction, so a value that reaches the store always fits the column.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of fractional digits every amount carries
pub const MONEY_SCALE: u32 = 2;

/// Total number of significant digits of the storage column
pub const MONEY_PRECISION: u32 = 12;

/// Errors that can occur when constructing a monetary amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount {0} has more than 2 decimal places")]
    TooManyDecimals(Decimal),

    #[error("Amount {0} is negative")]
    Negative(Decimal),

    #[error("Amount {0} exceeds the maximum of 12 digits")]
    Overflow(Decimal),
}

/// A non-negative euro amount with exactly two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Creates a new amount, rejecting values that do not fit `NUMERIC(12,2)`
    ///
    /// # Arguments
    ///
    /// * `amount` - The decimal amount; at most two fractional digits
    ///
    /// # Returns
    ///
    /// The amount rescaled to exactly two decimal places
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }

        let normalized = amount.normalize();
        if normalized.scale() > MONEY_SCALE {
            return Err(MoneyError::TooManyDecimals(amount));
        }

        let limit = Decimal::from(10i64.pow(MONEY_PRECISION - MONEY_SCALE));
        if normalized >= limit {
            return Err(MoneyError::Overflow(amount));
        }

        let mut scaled = normalized;
        scaled.rescale(MONEY_SCALE);
        Ok(Self(scaled))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(Decimal::new(0, MONEY_SCALE))
    }

    /// Creates an amount from cents
    pub fn from_cents(cents: i64) -> Result<Self, MoneyError> {
        Self::new(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EUR {}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cents_always_fit(cents in 0i64..1_000_000_000_000i64) {
            let money = Money::from_cents(cents).unwrap();
            prop_assert_eq!(money.amount().scale(), MONEY_SCALE);
            prop_assert_eq!(money.amount(), Decimal::new(cents, MONEY_SCALE));
        }

        #[test]
        fn sub_cent_fractions_are_rejected(cents in 0i64..1_000_000i64, extra in 1i64..10i64) {
            let amount = Decimal::new(cents * 10 + extra, 3);
            prop_assert!(Money::new(amount).is_err());
        }
    }
}
