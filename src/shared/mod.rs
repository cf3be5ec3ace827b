//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A crypto ticker symbol (e.g. `"BTC"`).
///
/// Normalized to upper case on construction — the backend stores and matches
/// symbols upper-cased, so `Symbol::new("btc")` and `Symbol::new("BTC")`
/// are the same symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol::new(s))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Display currency for valuations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "FCFA")]
    Fcfa,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Fcfa => "FCFA",
        }
    }

    /// Display decimal places. FCFA has no minor unit.
    pub fn decimals(&self) -> usize {
        match self {
            Self::Usd | Self::Eur => 2,
            Self::Fcfa => 0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Fcfa => "FCFA",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "FCFA" => Ok(Self::Fcfa),
            other => Err(format!("unknown currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercased_on_construction() {
        assert_eq!(Symbol::new("btc").as_str(), "BTC");
        assert_eq!(Symbol::new("Eth").as_str(), "ETH");
        assert_eq!(Symbol::new("SOL").as_str(), "SOL");
    }

    #[test]
    fn test_symbol_serde_transparent() {
        let sym = Symbol::new("btc");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"BTC\"");
        let back: Symbol = serde_json::from_str("\"doge\"").unwrap();
        assert_eq!(back.as_str(), "DOGE");
    }

    #[test]
    fn test_currency_default_is_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
        assert_eq!(Currency::default().as_str(), "USD");
    }

    #[test]
    fn test_currency_serde() {
        let c: Currency = serde_json::from_str("\"FCFA\"").unwrap();
        assert_eq!(c, Currency::Fcfa);
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
    }

    #[test]
    fn test_currency_decimals() {
        assert_eq!(Currency::Usd.decimals(), 2);
        assert_eq!(Currency::Eur.decimals(), 2);
        assert_eq!(Currency::Fcfa.decimals(), 0);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("GBP".parse::<Currency>().is_err());
    }
}
