//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::etf::Etf;
use crate::routes::RouteInfo;

/// Form values to validate
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// ETF identifier, e.g. "msci-world"
    pub etf: String,
    /// Monthly rate in EUR
    pub rate: f64,
    /// Duration in years
    #[serde(default)]
    pub years: u32,
}

/// One ETF of the catalogue
#[derive(Debug, Serialize, Deserialize)]
pub struct EtfResponse {
    pub id: String,
    pub name: String,
    pub isin: String,
}

impl From<Etf> for EtfResponse {
    fn from(etf: Etf) -> Self {
        Self {
            id: etf.id().to_string(),
            name: etf.name().to_string(),
            isin: etf.isin().to_string(),
        }
    }
}

/// ETF catalogue response
#[derive(Debug, Serialize, Deserialize)]
pub struct EtfListResponse {
    pub etfs: Vec<EtfResponse>,
}

/// Route table listing
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteInfo>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
    pub loaded_routes: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
