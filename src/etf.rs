//! ETF Catalogue
//!
//! The fixed set of ETFs a savings plan can be opened on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ETF a savings plan invests into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Etf {
    #[default]
    #[serde(rename = "msci-world")]
    MsciWorld,
    #[serde(rename = "ftse-all-world")]
    FtseAllWorld,
    #[serde(rename = "msci-emerging-markets")]
    MsciEmergingMarkets,
    #[serde(rename = "sp500")]
    SP500,
    #[serde(rename = "stoxx-europe-600")]
    StoxxEurope600,
}

impl Etf {
    /// All ETFs in display order
    pub const ALL: [Etf; 5] = [
        Etf::MsciWorld,
        Etf::FtseAllWorld,
        Etf::MsciEmergingMarkets,
        Etf::SP500,
        Etf::StoxxEurope600,
    ];

    /// Stable identifier, used as form value and in the JSON API
    pub fn id(&self) -> &'static str {
        match self {
            Etf::MsciWorld => "msci-world",
            Etf::FtseAllWorld => "ftse-all-world",
            Etf::MsciEmergingMarkets => "msci-emerging-markets",
            Etf::SP500 => "sp500",
            Etf::StoxxEurope600 => "stoxx-europe-600",
        }
    }

    /// Human-readable fund name
    pub fn name(&self) -> &'static str {
        match self {
            Etf::MsciWorld => "iShares Core MSCI World",
            Etf::FtseAllWorld => "Vanguard FTSE All-World",
            Etf::MsciEmergingMarkets => "iShares Core MSCI Emerging Markets IMI",
            Etf::SP500 => "iShares Core S&P 500",
            Etf::StoxxEurope600 => "iShares STOXX Europe 600",
        }
    }

    pub fn isin(&self) -> &'static str {
        match self {
            Etf::MsciWorld => "IE00B4L5Y983",
            Etf::FtseAllWorld => "IE00BK5BQT80",
            Etf::MsciEmergingMarkets => "IE00BKM4GZ66",
            Etf::SP500 => "IE00B5BMR087",
            Etf::StoxxEurope600 => "DE0002635307",
        }
    }
}

impl fmt::Display for Etf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Etf {
    type Err = EtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Etf::ALL
            .into_iter()
            .find(|etf| etf.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| EtfError::Unknown(id.to_string()))
    }
}

/// ETF lookup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EtfError {
    #[error("Unknown ETF: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for etf in Etf::ALL {
            assert_eq!(etf.id().parse::<Etf>().unwrap(), etf);
        }
        assert_eq!(" MSCI-World ".parse::<Etf>().unwrap(), Etf::MsciWorld);
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "dax".parse::<Etf>().unwrap_err();
        assert_eq!(err, EtfError::Unknown("dax".to_string()));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Etf::SP500).unwrap();
        assert_eq!(json, "\"sp500\"");
        let etf: Etf = serde_json::from_str("\"ftse-all-world\"").unwrap();
        assert_eq!(etf, Etf::FtseAllWorld);
    }
}
