//! Currency descriptors
//!
//! The set of monetary units the engine trades in. Each currency fixes its
//! display symbol and the number of fractional digits an amount may carry;
//! both are frozen at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A monetary unit with fixed display precision and symbol.
///
/// The set is closed: an amount can only ever be denominated in one of these
/// units, so a "not a valid currency" state is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Btc,
}

impl Currency {
    /// Number of fractional digits an amount in this currency may carry.
    pub const fn decimal_precision(self) -> u32 {
        match self {
            Currency::Usd | Currency::Eur => 2,
            Currency::Btc => 8,
        }
    }

    /// Display symbol used when formatting amounts.
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Btc => "Ƀ",
        }
    }

    /// ISO-style code identifying the currency.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Btc => "BTC",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a currency code does not name a known currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "BTC" => Ok(Currency::Btc),
            other => Err(UnknownCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_is_fixed_per_currency() {
        assert_eq!(Currency::Usd.decimal_precision(), 2);
        assert_eq!(Currency::Eur.decimal_precision(), 2);
        assert_eq!(Currency::Btc.decimal_precision(), 8);
    }

    #[test]
    fn code_round_trips_through_from_str() {
        for currency in [Currency::Usd, Currency::Eur, Currency::Btc] {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "DOGE".parse::<Currency>().unwrap_err();
        assert_eq!(err, UnknownCurrency("DOGE".to_string()));
    }

    #[test]
    fn display_prints_the_code() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Btc.symbol(), "Ƀ");
    }
}
