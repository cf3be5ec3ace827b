//! Wire types for alert requests (REST).

use super::AlertCondition;
use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// POST body for creating an alert. The symbol is upper-cased by `Symbol`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAlertRequest {
    pub symbol: Symbol,
    pub target_price: f64,
    pub condition: AlertCondition,
}

impl CreateAlertRequest {
    pub fn new(symbol: impl Into<Symbol>, target_price: f64, condition: AlertCondition) -> Self {
        Self {
            symbol: symbol.into(),
            target_price,
            condition,
        }
    }
}
