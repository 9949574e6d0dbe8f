//! Money value object
//!
//! An exact decimal amount denominated in a specific [`Currency`]. All
//! amounts are validated at construction time, so a value that violates its
//! currency's precision cannot exist in the system, and every comparison or
//! arithmetic operation is currency-checked.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Errors that can occur when creating or combining [`Money`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("malformed decimal amount: {0:?}")]
    Malformed(String),

    #[error("{currency} allows {allowed} decimal places, got {got}")]
    TooManyDecimals {
        currency: Currency,
        allowed: u32,
        got: u32,
    },

    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },
}

/// An exact amount of a specific currency.
///
/// Equality is scale-normalized (`5` and `5.00` in the same currency are
/// equal) and never fails: values of different currencies are simply
/// unequal. Ordering is total within one currency and undefined across
/// currencies — [`Money::checked_cmp`] reports the mismatch as an error,
/// `partial_cmp` as `None`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMoney", into = "RawMoney")]
pub struct Money {
    currency: Currency,
    amount: Decimal,
}

impl Money {
    /// Parse `amount` as an exact decimal in `currency`.
    ///
    /// No rounding is ever applied: malformed text and amounts with more
    /// fractional digits than the currency allows are rejected.
    pub fn new(currency: Currency, amount: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(amount)
            .map_err(|_| MoneyError::Malformed(amount.to_string()))?;
        Self::from_decimal(currency, amount)
    }

    /// Build a Money from an already-parsed decimal, applying the same
    /// precision rule as [`Money::new`].
    pub fn from_decimal(currency: Currency, amount: Decimal) -> Result<Self, MoneyError> {
        if amount.scale() > currency.decimal_precision() {
            return Err(MoneyError::TooManyDecimals {
                currency,
                allowed: currency.decimal_precision(),
                got: amount.scale(),
            });
        }
        Ok(Self { currency, amount })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The underlying decimal value, exact digits preserved.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Numeric comparison, failing if the currencies differ.
    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Currency-checked addition. The sum keeps the wider scale of the two
    /// operands, which never exceeds the currency precision.
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Money {
            currency: self.currency,
            amount: self.amount + other.amount,
        })
    }

    /// Currency-checked subtraction.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Money {
            currency: self.currency,
            amount: self.amount - other.amount,
        })
    }

    fn same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.symbol())
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}, {})", self.currency.code(), self.amount)
    }
}

/// Wire form of a Money value. Deserialization funnels through
/// [`Money::new`], so an out-of-precision amount cannot enter via serde.
#[derive(Serialize, Deserialize)]
struct RawMoney {
    currency: Currency,
    amount: String,
}

impl TryFrom<RawMoney> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.currency, &raw.amount)
    }
}

impl From<Money> for RawMoney {
    fn from(money: Money) -> Self {
        RawMoney {
            currency: money.currency,
            amount: money.amount.to_string(),
        }
    }
}
