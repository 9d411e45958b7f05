//! # Sparplan
//!
//! ETF savings-plan calculator: a Leptos frontend (`sparplan-ui`) on top of
//! the domain core in this crate, hosted by an Axum server.
//!
//! ## Modules
//!
//! - [`etf`]: The fixed ETF catalogue
//! - [`plan`]: Form input, the contribution-rate rule and plan records
//! - [`routes`]: Route table with eager and lazily loaded views
//!
//! With the default `server` feature:
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`shell`]: HTML page shells for the application routes
//! - [`api`]: Axum server
//!
//! The core modules build without the `server` feature, which is how the
//! wasm frontend depends on this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparplan::{validate, Etf, SavingsPlanInput};
//!
//! let input = SavingsPlanInput { etf: Etf::MsciWorld, rate: 10.0, years: 15 };
//! let result = validate(&input);
//!
//! assert!(!result.is_valid);
//! assert_eq!(result.message, "Sparrate muss zwischen 25 und 10.000 € liegen");
//! ```

pub mod etf;
pub mod plan;
pub mod routes;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod shell;

// Re-export top-level types for convenience
pub use etf::{Etf, EtfError};

pub use plan::{
    format_eur, parse_rate, parse_years, validate, PlanError, SavingsPlan, SavingsPlanInput,
    ValidationResult, INVALID_AMOUNT, MAX_RATE, MIN_RATE, RATE_OUT_OF_RANGE,
};

pub use routes::{app_table, AppRoute, RouteEntry, RouteError, RouteInfo, RouteTable, ViewLoader};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, ConfigSource, LoggingConfig, ServerConfig};
