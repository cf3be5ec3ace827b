//! Network URL constants for the Coinfolio SDK.

/// Default REST API base URL (local backend).
///
/// Only used as the builder default — pass your own via
/// `CoinfolioClient::builder().base_url(..)`.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
