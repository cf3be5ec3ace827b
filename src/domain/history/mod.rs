//! History domain — portfolio value snapshots and performance over time.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted point-in-time total portfolio value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Performance over a day window, with aggregate change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceHistory {
    pub data: Vec<HistoryEntry>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_change: f64,
    pub percentage_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_history_deserializes_backend_shape() {
        let json = r#"{
            "data": [
                {"timestamp": "2024-01-08T00:00:00Z", "value": 50000.0},
                {"timestamp": "2024-01-15T00:00:00Z", "value": 52340.12}
            ],
            "start_date": "2024-01-08T00:00:00Z",
            "end_date": "2024-01-15T00:00:00Z",
            "total_change": 2340.12,
            "percentage_change": 4.68
        }"#;
        let h: PerformanceHistory = serde_json::from_str(json).unwrap();
        assert_eq!(h.data.len(), 2);
        assert_eq!(h.data[1].value, 52340.12);
        assert_eq!(h.percentage_change, 4.68);
    }
}
