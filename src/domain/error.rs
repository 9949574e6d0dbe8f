//! Domain error types
//!
//! Pure domain errors, independent of any infrastructure.

use thiserror::Error;

use super::auction::AuctionStatus;
use super::currency::Currency;
use super::money::{Money, MoneyError};

/// Why an auction refused a bid. Each variant carries what a caller needs
/// to explain the rejection to the bidder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BidRejection {
    #[error("auction is priced in {expected}, bid offered {offered}")]
    CurrencyMismatch {
        expected: Currency,
        offered: Currency,
    },

    #[error("offered {offered}, must exceed {required}")]
    AmountTooLow { offered: Money, required: Money },

    #[error("auction is {status}, not open for bidding")]
    AuctionNotActive { status: AuctionStatus },
}

/// Business rule violations and domain invariant failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("bid rejected: {0}")]
    BidRejected(#[from] BidRejection),

    #[error("auction cannot move from {from} to {to}")]
    InvalidTransition {
        from: AuctionStatus,
        to: AuctionStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_name_the_rule() {
        let err = BidRejection::AmountTooLow {
            offered: Money::new(Currency::Usd, "11.00").unwrap(),
            required: Money::new(Currency::Usd, "12.00").unwrap(),
        };
        assert_eq!(err.to_string(), "offered 11.00 $, must exceed 12.00 $");

        let err = BidRejection::CurrencyMismatch {
            expected: Currency::Usd,
            offered: Currency::Btc,
        };
        assert!(err.to_string().contains("USD"));
        assert!(err.to_string().contains("BTC"));
    }
}
