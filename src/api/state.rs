//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::routes::RouteTable;
use crate::shell;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Page shells keyed by route; home is rendered up front
    pub pages: Arc<RouteTable<String>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state, reading the page template from the static directory
    pub fn new(config: ServerConfig) -> Self {
        let template = shell::load_template(Path::new(&config.static_dir));
        Self::with_template(config, template)
    }

    /// Create state with an explicit page template
    pub fn with_template(config: ServerConfig, template: impl Into<Arc<str>>) -> Self {
        Self {
            config: Arc::new(config),
            pages: Arc::new(shell::page_table(template)),
            start_time: Instant::now(),
        }
    }

    /// Whether the built frontend is present in the static directory.
    ///
    /// Without it the page shells fall back to the embedded placeholder and
    /// the wasm bundle 404s.
    pub fn frontend_available(&self) -> bool {
        Path::new(&self.config.static_dir).join("index.html").is_file()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
