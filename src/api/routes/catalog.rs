//! Catalogue Routes
//!
//! - GET /api/v1/etfs - ETFs offered in the form
//! - GET /api/v1/routes - Route table with load state

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{EtfListResponse, RouteListResponse};
use crate::api::state::AppState;
use crate::etf::Etf;

/// GET /api/v1/etfs
pub async fn list_etfs() -> Json<EtfListResponse> {
    Json(EtfListResponse {
        etfs: Etf::ALL.into_iter().map(Into::into).collect(),
    })
}

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RouteListResponse> {
    Json(RouteListResponse {
        routes: state.pages.info(),
    })
}
