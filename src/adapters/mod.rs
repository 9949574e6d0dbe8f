//! Adapters module
//!
//! Lightweight implementations of the application ports, enough to run the
//! engine end-to-end without external infrastructure.

pub mod email;
pub mod memory;

pub use email::LoggingEmailGateway;
pub use memory::InMemoryAuctionsRepository;
