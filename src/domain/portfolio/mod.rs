//! Portfolio domain — holdings, valuation, diversification.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{Currency, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A held asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: String,
    pub symbol: Symbol,
    pub amount: f64,
    pub added_date: DateTime<Utc>,
}

/// Valuation of a single holding at current prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetValuation {
    pub symbol: Symbol,
    pub amount: f64,
    pub current_price: f64,
    pub total_value: f64,
    pub change_24h: f64,
}

/// Valuation of the whole portfolio in a chosen display currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioValuation {
    pub total_value: f64,
    pub currency: Currency,
    pub last_updated: DateTime<Utc>,
    pub assets: Vec<AssetValuation>,
}

/// One slice of the value-by-asset breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiversificationSlice {
    pub symbol: Symbol,
    pub value: f64,
    pub percentage: f64,
}
