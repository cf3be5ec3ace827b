//! Alerts sub-client — threshold management and evaluation.

use crate::client::CoinfolioClient;
use crate::domain::alert::wire::CreateAlertRequest;
use crate::domain::alert::{Alert, AlertCheckResult, AlertCondition, AlertStatus};
use crate::error::SdkError;
use crate::shared::Symbol;

/// Sub-client for alert operations.
pub struct Alerts<'a> {
    pub(crate) client: &'a CoinfolioClient,
}

impl<'a> Alerts<'a> {
    /// List alerts, optionally filtered by status.
    pub async fn list(&self, status: Option<AlertStatus>) -> Result<Vec<Alert>, SdkError> {
        Ok(self.client.http.get(&alerts_path(status)).await?)
    }

    /// Create an alert. The symbol is upper-cased before sending.
    pub async fn create(
        &self,
        symbol: impl Into<Symbol>,
        target_price: f64,
        condition: AlertCondition,
    ) -> Result<Alert, SdkError> {
        let req = CreateAlertRequest::new(symbol, target_price, condition);
        Ok(self.client.http.post("/alerts", &req).await?)
    }

    /// Delete an alert by id.
    pub async fn delete(&self, alert_id: &str) -> Result<(), SdkError> {
        let path = format!("/alerts/{}", urlencoding::encode(alert_id));
        Ok(self.client.http.delete(&path).await?)
    }

    /// Evaluate all active alerts against current prices.
    pub async fn check_all(&self) -> Result<AlertCheckResult, SdkError> {
        Ok(self.client.http.post_empty("/alerts/check").await?)
    }
}

fn alerts_path(status: Option<AlertStatus>) -> String {
    match status {
        Some(s) => format!("/alerts?status={}", s.as_str()),
        None => "/alerts".to_string(),
    }
}
