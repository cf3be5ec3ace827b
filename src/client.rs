//! High-level client — `CoinfolioClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::alert::client::Alerts;
use crate::domain::history::client::History;
use crate::domain::market::client::Market;
use crate::domain::portfolio::client::Portfolio;
use crate::error::SdkError;
use crate::http::CoinfolioHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::alert::client::Alerts as AlertsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::market::client::Market as MarketClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;

/// The primary entry point for the Coinfolio SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.portfolio()`, `client.alerts()`, etc. The client performs no
/// caching and no retries — every call is one HTTP request.
#[derive(Clone)]
pub struct CoinfolioClient {
    pub(crate) http: CoinfolioHttp,
}

impl CoinfolioClient {
    pub fn builder() -> CoinfolioClientBuilder {
        CoinfolioClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn alerts(&self) -> Alerts<'_> {
        Alerts { client: self }
    }

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinfolioClientBuilder {
    base_url: String,
    request_timeout: Option<Duration>,
}

impl Default for CoinfolioClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl CoinfolioClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Bound each request. Off by default — requests may hang as long as
    /// the transport allows.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CoinfolioClient, SdkError> {
        Ok(CoinfolioClient {
            http: CoinfolioHttp::new(&self.base_url, self.request_timeout),
        })
    }
}
