//! # Module: Dashboard Configuration
//!
//! ## Responsibility
//! Parse and validate the TOML file that tells the dashboard where the
//! backend lives, which endpoint set to mount, and how long to wait.
//! ```text
//! thanos-dashboard --config dashboard.toml
//! ```
//!
//! ## Guarantees
//! - Deterministic: same TOML input always produces the same `DashboardConfig`
//! - Validated: all semantic constraints are checked before a config is accepted
//! - Every field has a default; an empty file is a valid config
//!
//! ## NOT Responsible For
//! - Issuing requests (that belongs to `client`)
//! - Command-line overrides (that belongs to `cli`)

pub mod loader;
pub mod validation;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientTimeouts;
use crate::endpoint::{Endpoint, EndpointSet, Profile};

// ── Default value functions ──────────────────────────────────────────────

/// Default backend: the Flask app's development address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default page title.
pub const DEFAULT_TITLE: &str = "Thanos Fantasy Dashboard";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default connect timeout: 3000ms.
fn default_connect_timeout_ms() -> u64 {
    3000
}

/// Default whole-request timeout: 10 000ms.
fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration for the dashboard.
///
/// # Example
///
/// ```toml
/// [server]
/// base_url = "http://127.0.0.1:5000"
///
/// [dashboard]
/// profile = "combined"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend location and timeouts.
    pub server: ServerConfig,
    /// Which endpoint set to mount and how to title the page.
    pub dashboard: DisplayConfig,
    /// Explicit endpoint list, used only with `profile = "custom"`.
    pub endpoints: Vec<Endpoint>,
}

/// Backend location and request timeouts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
    /// TCP connection timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Endpoint set to mount.
    pub profile: Profile,
    /// Page title.
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            title: default_title(),
        }
    }
}

impl DashboardConfig {
    /// The endpoint set this config mounts.
    pub fn endpoint_set(&self) -> EndpointSet {
        match self.dashboard.profile {
            Profile::Custom => EndpointSet::custom(self.endpoints.clone()),
            profile => EndpointSet::for_profile(profile),
        }
    }

    /// Request timeouts for the HTTP client.
    pub fn timeouts(&self) -> ClientTimeouts {
        ClientTimeouts {
            connect: Duration::from_millis(self.server.connect_timeout_ms),
            request: Duration::from_millis(self.server.request_timeout_ms),
        }
    }
}
