//! Application module
//!
//! Use-case orchestration around the domain core: collaborator contracts
//! and the placing-bid workflow.

pub mod placing_bid;
pub mod ports;

pub use placing_bid::{
    PlacingBidInput, PlacingBidOutput, PlacingBidOutputBoundary, PlacingBidUseCase,
};
pub use ports::{AuctionsRepository, EmailGateway, NotificationError, RepositoryError};
