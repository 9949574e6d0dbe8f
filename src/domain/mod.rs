//! Domain module
//!
//! Core auction types and business logic. Everything here is pure and
//! synchronous: no I/O, no clocks, no locking. Callers own serialization of
//! mutations per auction identity.

pub mod auction;
pub mod bid;
pub mod currency;
pub mod error;
pub mod money;

pub use auction::{Auction, AuctionStatus};
pub use bid::{Bid, BidId};
pub use currency::{Currency, UnknownCurrency};
pub use error::{BidRejection, DomainError};
pub use money::{Money, MoneyError};
