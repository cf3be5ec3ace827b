//! Wire types for portfolio requests (REST).

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// POST body for adding an asset. The symbol is upper-cased by `Symbol`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAssetRequest {
    pub symbol: Symbol,
    pub amount: f64,
}

impl CreateAssetRequest {
    pub fn new(symbol: impl Into<Symbol>, amount: f64) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
        }
    }
}
