//! Configuration validation engine.
//!
//! ## Responsibility
//! Validate semantic constraints on a parsed [`DashboardConfig`] that cannot
//! be expressed through the type system alone (URL shape, timeouts, custom
//! endpoint lists).
//!
//! ## Guarantees
//! - Every validation rule has at least one test that triggers it
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value
//!
//! ## NOT Responsible For
//! - Parsing TOML (that belongs to `loader`)
//! - File I/O (that belongs to `loader`)

use std::collections::HashSet;

use super::DashboardConfig;
use crate::endpoint::Profile;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more semantic validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range or contradictory value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "server.base_url").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Validate all semantic constraints on a [`DashboardConfig`].
///
/// Collects every violation before returning so the caller sees the full
/// scope of issues at once.
///
/// # Returns
///
/// - `Ok(())` if all constraints pass.
/// - `Err(Vec<ConfigError>)` with every violation found.
///
/// # Panics
///
/// This function never panics.
pub fn validate(config: &DashboardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // ── Base URL ─────────────────────────────────────────────────────
    if let Err(reason) = check_base_url(&config.server.base_url) {
        errors.push(ConfigError::InvalidField {
            field: "server.base_url".into(),
            value: format!("{:?}", config.server.base_url),
            reason,
        });
    }

    // ── Timeouts > 0 ─────────────────────────────────────────────────
    if config.server.connect_timeout_ms == 0 {
        errors.push(ConfigError::InvalidField {
            field: "server.connect_timeout_ms".into(),
            value: "0".into(),
            reason: "must be at least 1ms".into(),
        });
    }

    if config.server.request_timeout_ms == 0 {
        errors.push(ConfigError::InvalidField {
            field: "server.request_timeout_ms".into(),
            value: "0".into(),
            reason: "must be at least 1ms".into(),
        });
    }

    // ── Endpoint list vs profile ─────────────────────────────────────
    match config.dashboard.profile {
        Profile::Custom if config.endpoints.is_empty() => {
            errors.push(ConfigError::InvalidField {
                field: "endpoints".into(),
                value: "[]".into(),
                reason: "profile \"custom\" needs at least one [[endpoints]] entry".into(),
            });
        }
        Profile::Custom => {}
        other if !config.endpoints.is_empty() => {
            errors.push(ConfigError::InvalidField {
                field: "endpoints".into(),
                value: format!("{} entries", config.endpoints.len()),
                reason: format!(
                    "endpoint sets are not merged; set dashboard.profile = \"custom\" instead of \"{other}\""
                ),
            });
        }
        _ => {}
    }

    // ── Each endpoint ────────────────────────────────────────────────
    let mut seen = HashSet::new();
    for (i, ep) in config.endpoints.iter().enumerate() {
        if ep.id.as_str().trim().is_empty() {
            errors.push(ConfigError::InvalidField {
                field: format!("endpoints[{i}].id"),
                value: String::new(),
                reason: "id must not be empty".into(),
            });
        } else if !seen.insert(ep.id.clone()) {
            errors.push(ConfigError::InvalidField {
                field: format!("endpoints[{i}].id"),
                value: ep.id.to_string(),
                reason: "duplicate endpoint id".into(),
            });
        }

        if !ep.path.starts_with('/') {
            errors.push(ConfigError::InvalidField {
                field: format!("endpoints[{i}].path"),
                value: format!("{:?}", ep.path),
                reason: "path must start with '/'".into(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that `base_url` is an absolute http(s) URL with a host.
fn check_base_url(base_url: &str) -> Result<(), String> {
    let url = reqwest::Url::parse(base_url).map_err(|e| format!("not a URL ({e})"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("scheme must be http or https, got '{}'", url.scheme()));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("URL has no host".into());
    }
    Ok(())
}
