//! History sub-client — performance window queries and snapshots.

use crate::client::CoinfolioClient;
use crate::domain::history::{HistoryEntry, PerformanceHistory};
use crate::error::SdkError;

/// Default performance window, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Sub-client for performance history operations.
pub struct History<'a> {
    pub(crate) client: &'a CoinfolioClient,
}

impl<'a> History<'a> {
    /// Performance over the last `days` days (default 7).
    pub async fn get(&self, days: Option<u32>) -> Result<PerformanceHistory, SdkError> {
        let path = history_path(days.unwrap_or(DEFAULT_HISTORY_DAYS));
        Ok(self.client.http.get(&path).await?)
    }

    /// Persist the current total portfolio value as a new history point.
    pub async fn save_snapshot(&self) -> Result<HistoryEntry, SdkError> {
        Ok(self.client.http.post_empty("/portfolio/history/save").await?)
    }
}

fn history_path(days: u32) -> String {
    format!("/portfolio/history?days={}", days)
}
