//! gavel — multi-item auction bidding engine
//!
//! Currency-safe money arithmetic and the auction aggregate that enforces
//! bidding invariants: monotonic competitiveness, single-currency bid
//! history, and a winner set with a uniform clearing price derived purely
//! from the accepted bids.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{
    Auction, AuctionStatus, Bid, BidId, BidRejection, Currency, DomainError, Money, MoneyError,
};
