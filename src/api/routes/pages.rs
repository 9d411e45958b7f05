//! Page Routes
//!
//! Everything outside `/api` and `/health` lands here. Application routes
//! are answered from the page table; any other path is looked up in the
//! static directory (wasm bundle, js glue, css) and 404s when missing.

use axum::{
    body::Body,
    extract::{Request, State},
    handler::HandlerWithoutStateExt,
    http::{Method, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::api::error::ApiError;
use crate::api::state::AppState;

/// Fallback handler for all non-API requests. Only GET and HEAD are served.
pub async fn serve(State(state): State<Arc<AppState>>, req: Request<Body>) -> Response {
    let method = req.method();
    if method != Method::GET && method != Method::HEAD {
        return ApiError::MethodNotAllowed(method.to_string()).into_response();
    }

    if let Some(page) = state.pages.resolve(req.uri().path()) {
        return Html(page.clone()).into_response();
    }

    let static_files =
        ServeDir::new(state.config.static_dir.as_str()).not_found_service(not_found.into_service());

    match static_files.oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No page or file for {}", uri.path()))
}
