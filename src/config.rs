//! Configuration module
//!
//! Loads the simulation binary's settings from environment variables.
//! Every key has a default so the binary runs out of the box.

use std::env;
use std::num::NonZeroUsize;

use crate::domain::{Currency, Money};

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Starting price of the simulated auction (currency included)
    pub starting_price: Money,

    /// Number of identical items for sale
    pub quantity: NonZeroUsize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let currency: Currency = env::var("AUCTION_CURRENCY")
            .unwrap_or_else(|_| "USD".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("AUCTION_CURRENCY"))?;

        let price_text =
            env::var("AUCTION_STARTING_PRICE").unwrap_or_else(|_| "10.00".to_string());
        let starting_price = Money::new(currency, &price_text)
            .map_err(|_| ConfigError::InvalidValue("AUCTION_STARTING_PRICE"))?;

        let quantity = env::var("AUCTION_QUANTITY")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidValue("AUCTION_QUANTITY"))?;

        Ok(Self {
            starting_price,
            quantity,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
