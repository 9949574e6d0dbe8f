//! Placing-bid use case integration tests
//!
//! Drive the orchestrator end-to-end against the in-memory adapters.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{open_auction, usd, RecordingEmailGateway, RecordingPresenter};
use gavel::adapters::InMemoryAuctionsRepository;
use gavel::application::{
    AuctionsRepository, PlacingBidInput, PlacingBidOutput, PlacingBidUseCase, RepositoryError,
};
use gavel::{AppError, BidId, BidRejection, DomainError};

async fn seeded_repository(
    starting_price: &str,
    items: usize,
) -> (Arc<InMemoryAuctionsRepository>, Uuid) {
    let repository = Arc::new(InMemoryAuctionsRepository::new());
    let auction_id = Uuid::new_v4();
    repository
        .save(&open_auction(auction_id, usd(starting_price), items))
        .await
        .unwrap();
    (repository, auction_id)
}

fn input(bidder_id: Uuid, auction_id: Uuid, amount: &str) -> PlacingBidInput {
    PlacingBidInput {
        bidder_id,
        auction_id,
        amount: usd(amount),
    }
}

#[tokio::test]
async fn accepted_bid_is_persisted_notified_and_reported() {
    let (repository, auction_id) = seeded_repository("10.00", 1).await;
    let gateway = Arc::new(RecordingEmailGateway::default());
    let use_case = PlacingBidUseCase::new(repository.clone(), gateway.clone());
    let alice = Uuid::new_v4();
    let mut presenter = RecordingPresenter::default();

    use_case
        .execute(input(alice, auction_id, "12.00"), &mut presenter)
        .await
        .unwrap();

    assert_eq!(
        presenter.outputs,
        vec![PlacingBidOutput {
            is_winner: true,
            current_price: usd("12.00"),
        }]
    );

    let stored = repository.get(auction_id).await.unwrap();
    assert_eq!(stored.winners(), vec![alice]);
    assert_eq!(stored.bids().len(), 1);
    assert!(matches!(stored.bids()[0].id(), BidId::Saved(_)));

    assert_eq!(gateway.notifications(), vec![(auction_id, alice)]);
}

#[tokio::test]
async fn only_newly_winning_bidders_are_notified() {
    let (repository, auction_id) = seeded_repository("10.00", 1).await;
    let gateway = Arc::new(RecordingEmailGateway::default());
    let use_case = PlacingBidUseCase::new(repository.clone(), gateway.clone());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let mut presenter = RecordingPresenter::default();
    use_case
        .execute(input(alice, auction_id, "12.00"), &mut presenter)
        .await
        .unwrap();
    use_case
        .execute(input(bob, auction_id, "15.00"), &mut presenter)
        .await
        .unwrap();

    // Alice was notified when she took the lead, Bob when he displaced her;
    // nobody is re-notified for staying a winner.
    assert_eq!(
        gateway.notifications(),
        vec![(auction_id, alice), (auction_id, bob)]
    );
    assert_eq!(
        presenter.outputs.last(),
        Some(&PlacingBidOutput {
            is_winner: true,
            current_price: usd("15.00"),
        })
    );
}

#[tokio::test]
async fn rejected_bid_leaves_the_store_untouched() {
    let (repository, auction_id) = seeded_repository("10.00", 1).await;
    let gateway = Arc::new(RecordingEmailGateway::default());
    let use_case = PlacingBidUseCase::new(repository.clone(), gateway.clone());
    let alice = Uuid::new_v4();
    let carol = Uuid::new_v4();

    let mut presenter = RecordingPresenter::default();
    use_case
        .execute(input(alice, auction_id, "12.00"), &mut presenter)
        .await
        .unwrap();

    let err = use_case
        .execute(input(carol, auction_id, "11.00"), &mut presenter)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::BidRejected(BidRejection::AmountTooLow { .. }))
    ));

    // Nothing was presented for the rejected attempt
    assert_eq!(presenter.outputs.len(), 1);

    let stored = repository.get(auction_id).await.unwrap();
    assert_eq!(stored.bids().len(), 1);
    assert_eq!(stored.winners(), vec![alice]);
    assert_eq!(stored.current_price(), usd("12.00"));
    assert_eq!(gateway.notifications(), vec![(auction_id, alice)]);
}

#[tokio::test]
async fn unknown_auction_reports_not_found() {
    let repository = Arc::new(InMemoryAuctionsRepository::new());
    let use_case = PlacingBidUseCase::new(
        repository.clone(),
        Arc::new(RecordingEmailGateway::default()),
    );
    let auction_id = Uuid::new_v4();

    let mut presenter = RecordingPresenter::default();
    let err = use_case
        .execute(input(Uuid::new_v4(), auction_id, "12.00"), &mut presenter)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Repository(RepositoryError::NotFound(id)) if id == auction_id
    ));
    assert!(presenter.outputs.is_empty());
}

#[tokio::test]
async fn notification_failure_does_not_undo_an_accepted_bid() {
    let (repository, auction_id) = seeded_repository("10.00", 1).await;
    let gateway = Arc::new(RecordingEmailGateway::failing());
    let use_case = PlacingBidUseCase::new(repository.clone(), gateway.clone());
    let alice = Uuid::new_v4();

    let mut presenter = RecordingPresenter::default();
    use_case
        .execute(input(alice, auction_id, "12.00"), &mut presenter)
        .await
        .unwrap();

    // The gateway was tried and failed, yet the bid stands and the outcome
    // was still presented.
    assert_eq!(gateway.notifications(), vec![(auction_id, alice)]);
    let stored = repository.get(auction_id).await.unwrap();
    assert_eq!(stored.winners(), vec![alice]);
    assert_eq!(
        presenter.outputs,
        vec![PlacingBidOutput {
            is_winner: true,
            current_price: usd("12.00"),
        }]
    );
}

#[tokio::test]
async fn multi_item_auction_reports_both_winners() {
    let (repository, auction_id) = seeded_repository("10.00", 2).await;
    let gateway = Arc::new(RecordingEmailGateway::default());
    let use_case = PlacingBidUseCase::new(repository.clone(), gateway.clone());
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let mut presenter = RecordingPresenter::default();
    use_case
        .execute(input(alice, auction_id, "12.00"), &mut presenter)
        .await
        .unwrap();
    use_case
        .execute(input(bob, auction_id, "10.50"), &mut presenter)
        .await
        .unwrap();

    // Bob fills the free slot below Alice's bid; the uniform price is the
    // lowest winning bid.
    assert_eq!(
        presenter.outputs.last(),
        Some(&PlacingBidOutput {
            is_winner: true,
            current_price: usd("10.50"),
        })
    );
    let stored = repository.get(auction_id).await.unwrap();
    assert_eq!(stored.winners(), vec![alice, bob]);
    assert_eq!(
        gateway.notifications(),
        vec![(auction_id, alice), (auction_id, bob)]
    );
}
