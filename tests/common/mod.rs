//! Common test utilities

use std::num::NonZeroUsize;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use uuid::Uuid;

use gavel::application::{
    EmailGateway, NotificationError, PlacingBidOutput, PlacingBidOutputBoundary,
};
use gavel::{Auction, Currency, Money};

pub fn usd(amount: &str) -> Money {
    Money::new(Currency::Usd, amount).unwrap()
}

/// An auction already opened for bidding.
pub fn open_auction(id: Uuid, starting_price: Money, items: usize) -> Auction {
    let now = Utc::now();
    let mut auction = Auction::new(
        id,
        "Integration lot",
        starting_price,
        NonZeroUsize::new(items).expect("items must be positive"),
        now,
        now + TimeDelta::hours(2),
    );
    auction.open().unwrap();
    auction
}

/// Presenter spy capturing everything the use case reported.
#[derive(Default)]
pub struct RecordingPresenter {
    pub outputs: Vec<PlacingBidOutput>,
}

impl PlacingBidOutputBoundary for RecordingPresenter {
    fn present(&mut self, output: PlacingBidOutput) {
        self.outputs.push(output);
    }
}

/// Gateway spy recording notifications; can be told to fail every send.
#[derive(Default)]
pub struct RecordingEmailGateway {
    notified: Mutex<Vec<(Uuid, Uuid)>>,
    fail: bool,
}

impl RecordingEmailGateway {
    pub fn failing() -> Self {
        Self {
            notified: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn notifications(&self) -> Vec<(Uuid, Uuid)> {
        self.notified.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailGateway for RecordingEmailGateway {
    async fn notify_about_winning_auction(
        &self,
        auction_id: Uuid,
        bidder_id: Uuid,
    ) -> Result<(), NotificationError> {
        self.notified.lock().unwrap().push((auction_id, bidder_id));
        if self.fail {
            return Err(NotificationError("smtp unavailable".to_string()));
        }
        Ok(())
    }
}
