//! Alert domain — user-defined price thresholds.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trigger direction for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    Above,
    Below,
}

impl AlertCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

impl std::fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Triggered,
    Cancelled,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Triggered => "triggered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A price alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    pub symbol: Symbol,
    pub target_price: f64,
    pub condition: AlertCondition,
    pub status: AlertStatus,
    pub created_date: DateTime<Utc>,
}

/// Result of evaluating all active alerts against current prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertCheckResult {
    pub total_checked: u32,
    pub triggered_count: u32,
    pub triggered_alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_deserializes_backend_shape() {
        let json = r#"{
            "id": "a1",
            "symbol": "BTC",
            "target_price": 100000.0,
            "condition": "above",
            "status": "active",
            "created_date": "2024-01-15T10:30:00Z"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.condition, AlertCondition::Above);
        assert_eq!(alert.status, AlertStatus::Active);
    }

    #[test]
    fn test_condition_and_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&AlertCondition::Below).unwrap(),
            "\"below\""
        );
        assert_eq!(
            serde_json::to_string(&AlertStatus::Triggered).unwrap(),
            "\"triggered\""
        );
        let s: AlertStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(s, AlertStatus::Cancelled);
    }

    #[test]
    fn test_check_result_deserializes() {
        let json = r#"{"total_checked": 3, "triggered_count": 0, "triggered_alerts": []}"#;
        let r: AlertCheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.total_checked, 3);
        assert!(r.triggered_alerts.is_empty());
    }
}
