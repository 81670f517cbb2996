//! # thanos-dashboard
//!
//! Terminal dashboard for the Thanos fantasy-football backend.
//!
//! ## Architecture
//!
//! One view, one round of independent GET requests per mount:
//! ```text
//! EndpointSet ─mount─▶ DashboardView ─spawn─▶ fetch task × N ─mpsc─▶ apply_completions()
//!                                                                     │
//!                                         render::section_body() ◀────┘
//! ```
//! Each section shows its report as pretty-printed JSON as soon as it
//! resolves, or the error text if the request failed.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod client;
pub mod config;
pub mod demo;
pub mod endpoint;
pub mod headless;
pub mod render;
pub mod report;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

// Re-exports for convenience
pub use client::{ClientTimeouts, FetchError, HttpReportSource, ReportSource};
pub use demo::DemoReportSource;
pub use endpoint::{Endpoint, EndpointId, EndpointSet, Profile};
pub use report::{EndpointResult, ResultStatus};
pub use view::DashboardView;

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"`: structured JSON output for log aggregators
/// - anything else (including unset): human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` and defaults to `info`.
/// Output always goes to stderr so that stdout carries only report text.
///
/// # Errors
///
/// Returns [`DashboardError::Other`] if the global subscriber has already
/// been set (e.g. by a previous call or a test harness).
///
/// # Panics
///
/// This function never panics.
///
/// # Example
///
/// ```no_run
/// # use thanos_dashboard::{init_tracing, DashboardError};
/// # fn example() -> Result<(), DashboardError> {
/// init_tracing()?;
/// # Ok(()) }
/// ```
pub fn init_tracing() -> Result<(), DashboardError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| DashboardError::Other(format!("tracing init failed: {e}")))
}

/// Top-level startup errors.
///
/// Per-endpoint fetch failures never surface here: they are captured in the
/// endpoint's [`ResultStatus::Failed`] slot and rendered in place. This enum
/// only covers failures that prevent the dashboard from starting at all.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The configuration file could not be read, parsed, or validated.
    #[error("configuration error: {0}")]
    Config(#[from] config::validation::ConfigError),

    /// The HTTP client could not be constructed.
    #[error("http client error: {0}")]
    Http(String),

    /// Terminal setup or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}
