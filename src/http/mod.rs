//! HTTP transport for the Coinfolio REST API.

mod client;

pub use client::CoinfolioHttp;
