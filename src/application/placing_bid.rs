//! Placing-bid use case
//!
//! Orchestrates one bid attempt: load the auction, apply the bid, persist,
//! notify bidders who just entered the winner set, and report the outcome
//! for the submitting bidder through a caller-supplied presenter.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Bid, Money};
use crate::error::AppResult;

use super::ports::{AuctionsRepository, EmailGateway};

/// One bid attempt: who offers how much on which auction.
#[derive(Debug, Clone)]
pub struct PlacingBidInput {
    pub bidder_id: Uuid,
    pub auction_id: Uuid,
    pub amount: Money,
}

/// The submitting bidder's outcome after an accepted bid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacingBidOutput {
    pub is_winner: bool,
    pub current_price: Money,
}

/// Output channel for the bid outcome, supplied by the caller. Decouples
/// the use case from any specific presentation.
pub trait PlacingBidOutputBoundary: Send {
    fn present(&mut self, output: PlacingBidOutput);
}

/// The bid-placement orchestrator.
///
/// Rejections propagate to the caller as typed errors without touching the
/// repository or the presenter; retry policy belongs to the caller.
pub struct PlacingBidUseCase {
    auctions: Arc<dyn AuctionsRepository>,
    email_gateway: Arc<dyn EmailGateway>,
}

impl PlacingBidUseCase {
    pub fn new(auctions: Arc<dyn AuctionsRepository>, email_gateway: Arc<dyn EmailGateway>) -> Self {
        Self {
            auctions,
            email_gateway,
        }
    }

    pub async fn execute(
        &self,
        input: PlacingBidInput,
        presenter: &mut dyn PlacingBidOutputBoundary,
    ) -> AppResult<()> {
        let mut auction = self.auctions.get(input.auction_id).await?;
        let winners_before = auction.winners();

        let bid = Bid::new(input.bidder_id, input.amount);
        auction.make_a_bid(bid)?;

        self.auctions.save(&auction).await?;

        tracing::info!(
            auction_id = %auction.id(),
            bidder_id = %input.bidder_id,
            current_price = %auction.current_price(),
            "bid accepted"
        );

        let winners_after = auction.winners();
        for bidder_id in winners_after
            .iter()
            .filter(|winner| !winners_before.contains(winner))
        {
            // An accepted bid is already persisted; a failed notification
            // must not undo it.
            if let Err(err) = self
                .email_gateway
                .notify_about_winning_auction(auction.id(), *bidder_id)
                .await
            {
                tracing::warn!(
                    auction_id = %auction.id(),
                    bidder_id = %bidder_id,
                    error = %err,
                    "failed to notify winning bidder"
                );
            }
        }

        presenter.present(PlacingBidOutput {
            is_winner: winners_after.contains(&input.bidder_id),
            current_price: auction.current_price(),
        });
        Ok(())
    }
}
