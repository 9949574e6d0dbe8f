//! Bid entity
//!
//! An immutable record of a bidder's offer against an auction. A bid has no
//! value equality: two offers of the same amount are distinct domain events,
//! told apart by their position in the auction's history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;

/// Identifier of a bid, assigned by persistence.
///
/// A freshly placed bid is `Unsaved`; repositories hand out `Saved` ids when
/// the owning auction is stored. The tagged form makes "no id yet" explicit
/// instead of hiding it in a nullable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidId {
    Unsaved,
    Saved(Uuid),
}

/// An offer of a [`Money`] amount by a bidder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    id: BidId,
    bidder_id: Uuid,
    amount: Money,
}

impl Bid {
    /// A new, not-yet-persisted bid.
    pub fn new(bidder_id: Uuid, amount: Money) -> Self {
        Self {
            id: BidId::Unsaved,
            bidder_id,
            amount,
        }
    }

    /// Rebuild a persisted bid from stored state.
    pub fn reconstitute(id: Uuid, bidder_id: Uuid, amount: Money) -> Self {
        Self {
            id: BidId::Saved(id),
            bidder_id,
            amount,
        }
    }

    pub fn id(&self) -> BidId {
        self.id
    }

    pub fn bidder_id(&self) -> Uuid {
        self.bidder_id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    #[test]
    fn fresh_bids_carry_no_id_until_saved() {
        let amount = Money::new(Currency::Usd, "12.00").unwrap();
        let bid = Bid::new(Uuid::new_v4(), amount.clone());
        assert_eq!(bid.id(), BidId::Unsaved);

        let id = Uuid::new_v4();
        let saved = Bid::reconstitute(id, bid.bidder_id(), amount);
        assert_eq!(saved.id(), BidId::Saved(id));
    }
}
