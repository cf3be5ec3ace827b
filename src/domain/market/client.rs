//! Market sub-client — top-coins listing.

use crate::client::CoinfolioClient;
use crate::domain::market::wire::TopCryptosResponse;
use crate::domain::market::CryptoMarketInfo;
use crate::error::SdkError;

/// Default number of coins to list.
pub const DEFAULT_TOP_LIMIT: u32 = 10;

/// Sub-client for market operations.
pub struct Market<'a> {
    pub(crate) client: &'a CoinfolioClient,
}

impl<'a> Market<'a> {
    /// Top coins by market cap (default 10), flattened out of the
    /// backend envelope.
    pub async fn top_cryptos(&self, limit: Option<u32>) -> Result<Vec<CryptoMarketInfo>, SdkError> {
        let path = top_path(limit.unwrap_or(DEFAULT_TOP_LIMIT));
        let resp: TopCryptosResponse = self.client.http.get(&path).await?;
        Ok(resp.top_cryptos.into_iter().map(Into::into).collect())
    }
}

fn top_path(limit: u32) -> String {
    format!("/market/top?limit={}", limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_path_default_limit() {
        assert_eq!(top_path(DEFAULT_TOP_LIMIT), "/market/top?limit=10");
    }

    #[test]
    fn test_top_path_custom_limit() {
        assert_eq!(top_path(50), "/market/top?limit=50");
    }
}
