//! Conversions from wire types to domain types for market data.

use super::wire::TopCryptoEntry;
use super::CryptoMarketInfo;

impl From<TopCryptoEntry> for CryptoMarketInfo {
    fn from(e: TopCryptoEntry) -> Self {
        Self {
            rank: e.rank,
            name: e.name,
            symbol: e.symbol,
            price: e.price,
            change_24h: e.percent_change_24h,
            market_cap: e.market_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::wire::TopCryptosResponse;
    use crate::shared::Symbol;

    fn sample_entry() -> TopCryptoEntry {
        TopCryptoEntry {
            rank: 1,
            symbol: Symbol::new("BTC"),
            name: "Bitcoin".to_string(),
            price: 96123.45,
            percent_change_24h: -2.31,
            market_cap: 1.9e12,
        }
    }

    #[test]
    fn test_entry_reshaped_into_flat_record() {
        let info: CryptoMarketInfo = sample_entry().into();
        assert_eq!(info.rank, 1);
        assert_eq!(info.symbol.as_str(), "BTC");
        assert_eq!(info.change_24h, -2.31);
        assert_eq!(info.market_cap, 1.9e12);
    }

    #[test]
    fn test_envelope_deserializes_and_flattens() {
        let json = r#"{
            "top_cryptos": [
                {"rank": 1, "symbol": "BTC", "name": "Bitcoin", "price": 96123.45,
                 "percent_change_24h": -2.31, "market_cap": 1.9e12},
                {"rank": 2, "symbol": "ETH", "name": "Ethereum", "price": 3456.78,
                 "percent_change_24h": 0.87, "market_cap": 4.2e11}
            ]
        }"#;
        let resp: TopCryptosResponse = serde_json::from_str(json).unwrap();
        let infos: Vec<CryptoMarketInfo> =
            resp.top_cryptos.into_iter().map(Into::into).collect();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].name, "Ethereum");
        assert_eq!(infos[1].change_24h, 0.87);
    }
}
