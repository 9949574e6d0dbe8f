//! Auction aggregate
//!
//! The aggregate root of the bidding engine. An auction owns the ordered
//! history of accepted bids; the winner set and current price are computed
//! from that history on every call, so no stored copy can drift out of sync
//! with it. `make_a_bid` either appends to the history or leaves the
//! auction untouched.

use std::fmt;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bid::Bid;
use super::currency::Currency;
use super::error::{BidRejection, DomainError};
use super::money::Money;

/// Lifecycle state of an auction: `Pending -> Open -> Closed`, never
/// reversed. Transitions are driven by an external scheduler through
/// [`Auction::open`] and [`Auction::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionStatus {
    Pending,
    Open,
    Closed,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuctionStatus::Pending => "pending",
            AuctionStatus::Open => "open",
            AuctionStatus::Closed => "closed",
        };
        f.write_str(label)
    }
}

/// A multi-item auction selling `quantity` identical items under a
/// uniform-price rule.
///
/// All bids share the starting price's currency. Mutation happens only
/// through [`Auction::make_a_bid`] and the lifecycle transitions; callers
/// must serialize mutations per auction identity (see the repository
/// contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    id: Uuid,
    title: String,
    starting_price: Money,
    quantity: NonZeroUsize,
    status: AuctionStatus,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    bids: Vec<Bid>,
}

impl Auction {
    /// Create a new auction in the `Pending` state.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        starting_price: Money,
        quantity: NonZeroUsize,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            starting_price,
            quantity,
            status: AuctionStatus::Pending,
            starts_at,
            ends_at,
            bids: Vec::new(),
        }
    }

    /// Rebuild an auction from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: Uuid,
        title: impl Into<String>,
        starting_price: Money,
        quantity: NonZeroUsize,
        status: AuctionStatus,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        bids: Vec<Bid>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            starting_price,
            quantity,
            status,
            starts_at,
            ends_at,
            bids,
        }
    }

    /// Accept or reject a bid.
    ///
    /// On success the bid joins the history and winners/current price
    /// reflect it immediately. On rejection the auction is unchanged.
    pub fn make_a_bid(&mut self, bid: Bid) -> Result<(), DomainError> {
        if self.status != AuctionStatus::Open {
            return Err(BidRejection::AuctionNotActive {
                status: self.status,
            }
            .into());
        }

        if bid.amount().currency() != self.currency() {
            return Err(BidRejection::CurrencyMismatch {
                expected: self.currency(),
                offered: bid.amount().currency(),
            }
            .into());
        }

        let required = self.required_to_compete();
        if bid.amount().amount() <= required.amount() {
            return Err(BidRejection::AmountTooLow {
                offered: bid.amount().clone(),
                required,
            }
            .into());
        }

        self.bids.push(bid);
        Ok(())
    }

    /// Bidders currently holding one of the items, best bid first.
    pub fn winners(&self) -> Vec<Uuid> {
        self.winning_bids()
            .iter()
            .map(|bid| bid.bidder_id())
            .collect()
    }

    /// The clearing price: what winners pay. The lowest winning bid, or the
    /// starting price while no bid has been accepted.
    pub fn current_price(&self) -> Money {
        match self.winning_bids().last() {
            Some(lowest_winning) => lowest_winning.amount().clone(),
            None => self.starting_price.clone(),
        }
    }

    /// Open the auction for bidding. Only a pending auction can open.
    pub fn open(&mut self) -> Result<(), DomainError> {
        self.transition(AuctionStatus::Pending, AuctionStatus::Open)
    }

    /// Close the auction. Only an open auction can close; closing is final.
    pub fn close(&mut self) -> Result<(), DomainError> {
        self.transition(AuctionStatus::Open, AuctionStatus::Closed)
    }

    fn transition(&mut self, from: AuctionStatus, to: AuctionStatus) -> Result<(), DomainError> {
        if self.status != from {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn starting_price(&self) -> &Money {
        &self.starting_price
    }

    pub fn currency(&self) -> Currency {
        self.starting_price.currency()
    }

    pub fn quantity(&self) -> NonZeroUsize {
        self.quantity
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// The accepted bid history, in submission order.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// The amount a new bid must strictly exceed to become competitive:
    /// the starting price while a winner slot is free, otherwise the lowest
    /// currently-winning bid it would displace.
    fn required_to_compete(&self) -> Money {
        let winning = self.winning_bids();
        if winning.len() < self.quantity.get() {
            self.starting_price.clone()
        } else {
            // winning is non-empty here since quantity >= 1
            winning[winning.len() - 1].amount().clone()
        }
    }

    /// The winning segment of the history: one bid per bidder (their
    /// highest; the earliest of equals), ranked by amount descending with
    /// submission order breaking ties, truncated to `quantity`.
    fn winning_bids(&self) -> Vec<&Bid> {
        let mut best: Vec<(usize, &Bid)> = Vec::new();
        for (position, bid) in self.bids.iter().enumerate() {
            match best
                .iter_mut()
                .find(|(_, held)| held.bidder_id() == bid.bidder_id())
            {
                Some(entry) if bid.amount().amount() > entry.1.amount().amount() => {
                    *entry = (position, bid);
                }
                Some(_) => {}
                None => best.push((position, bid)),
            }
        }

        best.sort_by(|(pos_a, a), (pos_b, b)| {
            b.amount()
                .amount()
                .cmp(&a.amount().amount())
                .then(pos_a.cmp(pos_b))
        });
        best.truncate(self.quantity.get());
        best.into_iter().map(|(_, bid)| bid).collect()
    }
}
