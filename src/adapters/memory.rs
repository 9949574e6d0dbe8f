//! In-memory auction store
//!
//! Keeps whole auctions in a mutex-guarded map. The store-level lock
//! serializes writers, which covers the per-auction at-most-one-writer
//! requirement of the repository contract. Used by tests and the
//! simulation binary; durable storage is a deployment concern.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{AuctionsRepository, RepositoryError};
use crate::domain::{Auction, Bid, BidId};

#[derive(Debug, Default)]
pub struct InMemoryAuctionsRepository {
    auctions: Mutex<HashMap<Uuid, Auction>>,
}

impl InMemoryAuctionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_saved_bids(auction: &Auction) -> Auction {
        let bids = auction
            .bids()
            .iter()
            .map(|bid| match bid.id() {
                BidId::Saved(_) => bid.clone(),
                BidId::Unsaved => {
                    Bid::reconstitute(Uuid::new_v4(), bid.bidder_id(), bid.amount().clone())
                }
            })
            .collect();

        Auction::reconstitute(
            auction.id(),
            auction.title(),
            auction.starting_price().clone(),
            auction.quantity(),
            auction.status(),
            auction.starts_at(),
            auction.ends_at(),
            bids,
        )
    }
}

#[async_trait]
impl AuctionsRepository for InMemoryAuctionsRepository {
    async fn get(&self, auction_id: Uuid) -> Result<Auction, RepositoryError> {
        let auctions = self
            .auctions
            .lock()
            .map_err(|_| RepositoryError::Persistence("auction store lock poisoned".into()))?;
        auctions
            .get(&auction_id)
            .cloned()
            .ok_or(RepositoryError::NotFound(auction_id))
    }

    async fn save(&self, auction: &Auction) -> Result<(), RepositoryError> {
        let stored = Self::with_saved_bids(auction);
        let mut auctions = self
            .auctions
            .lock()
            .map_err(|_| RepositoryError::Persistence("auction store lock poisoned".into()))?;
        auctions.insert(stored.id(), stored);
        Ok(())
    }
}
