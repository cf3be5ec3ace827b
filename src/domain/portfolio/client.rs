//! Portfolio sub-client — holdings and valuation queries.

use crate::client::CoinfolioClient;
use crate::domain::portfolio::wire::CreateAssetRequest;
use crate::domain::portfolio::{Asset, DiversificationSlice, PortfolioValuation};
use crate::error::SdkError;
use crate::shared::{Currency, Symbol};

/// Sub-client for portfolio operations.
pub struct Portfolio<'a> {
    pub(crate) client: &'a CoinfolioClient,
}

impl<'a> Portfolio<'a> {
    /// Current valuation of all holdings. Defaults to USD.
    pub async fn valuation(
        &self,
        currency: Option<Currency>,
    ) -> Result<PortfolioValuation, SdkError> {
        let path = valuation_path(currency.unwrap_or_default());
        Ok(self.client.http.get(&path).await?)
    }

    /// Percentage breakdown of portfolio value by asset.
    pub async fn diversification(&self) -> Result<Vec<DiversificationSlice>, SdkError> {
        Ok(self.client.http.get("/portfolio/diversification").await?)
    }

    /// All held assets.
    pub async fn assets(&self) -> Result<Vec<Asset>, SdkError> {
        Ok(self.client.http.get("/portfolio/assets").await?)
    }

    /// Add a holding. The symbol is upper-cased before sending.
    pub async fn add_asset(
        &self,
        symbol: impl Into<Symbol>,
        amount: f64,
    ) -> Result<Asset, SdkError> {
        let req = CreateAssetRequest::new(symbol, amount);
        Ok(self.client.http.post("/portfolio/assets", &req).await?)
    }

    /// Remove a holding by id.
    pub async fn delete_asset(&self, asset_id: &str) -> Result<(), SdkError> {
        let path = format!("/portfolio/assets/{}", urlencoding::encode(asset_id));
        Ok(self.client.http.delete(&path).await?)
    }
}

fn valuation_path(currency: Currency) -> String {
    format!("/portfolio/valuation?currency={}", currency.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valuation_path_defaults_to_usd() {
        assert_eq!(
            valuation_path(Currency::default()),
            "/portfolio/valuation?currency=USD"
        );
    }

    #[test]
    fn test_valuation_path_explicit_currency() {
        assert_eq!(
            valuation_path(Currency::Fcfa),
            "/portfolio/valuation?currency=FCFA"
        );
    }
}
