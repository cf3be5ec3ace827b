//! Wire types for market responses (REST).

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// REST envelope for the top-coins listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCryptosResponse {
    pub top_cryptos: Vec<TopCryptoEntry>,
}

/// A single coin as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCryptoEntry {
    pub rank: u32,
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub percent_change_24h: f64,
    pub market_cap: f64,
}
