//! Bidding Simulation
//!
//! Runs a scripted bidding session against an in-memory auction store.
//! Run with: cargo run --bin simulate
//!
//! Configure via AUCTION_CURRENCY, AUCTION_STARTING_PRICE and
//! AUCTION_QUANTITY (see config module for defaults).

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use gavel::adapters::{InMemoryAuctionsRepository, LoggingEmailGateway};
use gavel::application::{
    AuctionsRepository, PlacingBidInput, PlacingBidOutput, PlacingBidOutputBoundary,
    PlacingBidUseCase,
};
use gavel::{AppError, Auction, Config, Currency, Money};

/// Prints each bidder's outcome to the console.
struct ConsolePresenter {
    bidder: &'static str,
}

impl PlacingBidOutputBoundary for ConsolePresenter {
    fn present(&mut self, output: PlacingBidOutput) {
        if output.is_winner {
            println!(
                "{} is currently winning; price stands at {}",
                self.bidder, output.current_price
            );
        } else {
            println!(
                "{} is not winning; price stands at {}",
                self.bidder, output.current_price
            );
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gavel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn place(
    use_case: &PlacingBidUseCase,
    name: &'static str,
    bidder_id: Uuid,
    auction_id: Uuid,
    amount: Money,
) -> anyhow::Result<()> {
    let mut presenter = ConsolePresenter { bidder: name };
    let input = PlacingBidInput {
        bidder_id,
        auction_id,
        amount: amount.clone(),
    };
    match use_case.execute(input, &mut presenter).await {
        Ok(()) => Ok(()),
        Err(AppError::Domain(rejection)) => {
            println!("{}'s bid of {} was rejected: {}", name, amount, rejection);
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let currency = config.starting_price.currency();

    let repository = Arc::new(InMemoryAuctionsRepository::new());
    let use_case = PlacingBidUseCase::new(repository.clone(), Arc::new(LoggingEmailGateway));

    let auction_id = Uuid::new_v4();
    let now = Utc::now();
    let mut auction = Auction::new(
        auction_id,
        "Simulated lot",
        config.starting_price.clone(),
        config.quantity,
        now,
        now + TimeDelta::hours(1),
    );
    auction.open()?;
    repository.save(&auction).await?;

    tracing::info!(
        %auction_id,
        starting_price = %config.starting_price,
        quantity = config.quantity.get(),
        "auction opened"
    );

    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let carol = Uuid::new_v4();

    let step = Money::new(currency, "1.50")?;
    let first_offer = config.starting_price.checked_add(&step)?;
    let second_offer = first_offer.checked_add(&step)?;

    // A winning opener, an undercut, and a displacing counter-offer
    place(&use_case, "alice", alice, auction_id, first_offer).await?;
    place(&use_case, "bob", bob, auction_id, config.starting_price.clone()).await?;
    place(&use_case, "bob", bob, auction_id, second_offer.clone()).await?;

    // A bid in the wrong currency never gets in
    let foreign = match currency {
        Currency::Btc => Money::new(Currency::Usd, "99.99")?,
        _ => Money::new(Currency::Btc, "1.00000000")?,
    };
    place(&use_case, "carol", carol, auction_id, foreign).await?;

    // Close the auction; late bids bounce off
    let mut auction = repository.get(auction_id).await?;
    auction.close()?;
    repository.save(&auction).await?;

    let late_offer = second_offer.checked_add(&step)?;
    place(&use_case, "carol", carol, auction_id, late_offer).await?;

    let auction = repository.get(auction_id).await?;
    println!(
        "auction closed at {} with {} winner(s)",
        auction.current_price(),
        auction.winners().len()
    );

    Ok(())
}
