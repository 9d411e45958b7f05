//! Health Routes
//!
//! Health check endpoints for monitoring and container probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the built frontend is in the static directory.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.frontend_available() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let info = state.pages.info();
    let loaded_routes = info.iter().filter(|r| r.loaded).count();

    let status = if state.frontend_available() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        routes: info.len(),
        loaded_routes,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use tempfile::tempdir;

    fn state_for(static_dir: &std::path::Path) -> Arc<AppState> {
        Arc::new(AppState::new(ServerConfig {
            static_dir: static_dir.to_string_lossy().to_string(),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_without_frontend_build() {
        let dir = tempdir().unwrap();
        let state = state_for(dir.path());

        assert_eq!(readiness(State(state.clone())).await, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(full_health(State(state.clone())).await.status, "degraded");

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        assert_eq!(readiness(State(state.clone())).await, StatusCode::OK);
        assert_eq!(full_health(State(state)).await.status, "healthy");
    }
}
