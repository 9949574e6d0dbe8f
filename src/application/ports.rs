//! Collaborator contracts
//!
//! The boundaries the bidding core talks through. Implementations live
//! outside the domain: durable repositories, real mail delivery and so on
//! are deployment concerns; this crate ships in-memory and logging adapters
//! for tests and simulation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Auction;

/// Errors surfaced by auction persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("auction not found: {0}")]
    NotFound(Uuid),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Persistence boundary for auctions.
///
/// Implementations must guarantee at-most-one-writer-at-a-time per auction
/// identity: two bids applied concurrently against stale copies of the same
/// auction would corrupt winner and price computation.
#[async_trait]
pub trait AuctionsRepository: Send + Sync {
    /// Load an auction by id.
    async fn get(&self, auction_id: Uuid) -> Result<Auction, RepositoryError>;

    /// Persist an auction after a mutation. Assigns identifiers to any
    /// not-yet-saved bids in its history.
    async fn save(&self, auction: &Auction) -> Result<(), RepositoryError>;
}

/// Error from the notification channel. Never rolls back an accepted bid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notification failed: {0}")]
pub struct NotificationError(pub String);

/// Outbound notification boundary, fire-and-forget from the domain's view.
#[async_trait]
pub trait EmailGateway: Send + Sync {
    async fn notify_about_winning_auction(
        &self,
        auction_id: Uuid,
        bidder_id: Uuid,
    ) -> Result<(), NotificationError>;
}
