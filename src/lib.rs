//! # Coinfolio SDK
//!
//! A Rust SDK for the Coinfolio portfolio tracker REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, formatting, errors (always available)
//! 2. **HTTP transport** — `CoinfolioHttp`, the shared request helper
//! 3. **High-Level Client** — `CoinfolioClient` with nested sub-clients
//! 4. **View State** — `Query`/`Mutation`/`AutoRefresh` request-state primitives
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinfolio_sdk::prelude::*;
//!
//! let client = CoinfolioClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let valuation = client.portfolio().valuation(None).await?;
//! let top = client.market().top_cryptos(Some(20)).await?;
//! ```
//!
//! Driving a dashboard panel with observable request state:
//!
//! ```rust,ignore
//! let valuation = Query::builder({
//!     let client = client.clone();
//!     move |currency: Currency| {
//!         let client = client.clone();
//!         async move { client.portfolio().valuation(Some(currency)).await }
//!     }
//! })
//! .spawn(Currency::Usd);
//!
//! valuation.set_key(Currency::Eur); // re-runs; state resets to loading
//! let state = valuation.settled().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP transport ──────────────────────────────────────────────────

/// HTTP transport: base URL joining, JSON headers, uniform status errors.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinfolioClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: View State ──────────────────────────────────────────────────────

/// Query/Mutation/AutoRefresh view-state primitives.
#[cfg(feature = "state")]
pub mod state;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, Symbol};

    // Domain types — portfolio
    pub use crate::domain::portfolio::{
        Asset, AssetValuation, DiversificationSlice, PortfolioValuation,
    };

    // Domain types — history
    pub use crate::domain::history::{HistoryEntry, PerformanceHistory};

    // Domain types — alert
    pub use crate::domain::alert::{Alert, AlertCheckResult, AlertCondition, AlertStatus};

    // Domain types — market
    pub use crate::domain::market::CryptoMarketInfo;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AlertsClient, CoinfolioClient, CoinfolioClientBuilder, HistoryClient, MarketClient,
        PortfolioClient,
    };

    // View-state primitives
    #[cfg(feature = "state")]
    pub use crate::state::{AutoRefresh, Mutation, Query, RequestState};
}
