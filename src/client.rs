//! # Module: Report Client
//!
//! ## Responsibility
//! Issues a single GET for one endpoint and returns its JSON body. Every
//! failure mode is converted into a [`FetchError`] value at this boundary so
//! that callers can render it; nothing propagates further.
//!
//! ## Guarantees
//! - Exactly one HTTP request per `fetch` call (no retry)
//! - Non-2xx responses and transport failures both yield `Err(FetchError)`
//! - Non-panicking on every network, status, or decode failure
//!
//! ## NOT Responsible For
//! - Interpreting report payloads (they are opaque JSON)
//! - Scheduling or cancelling requests (that belongs to `view`)

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::DashboardError;

/// Why a single endpoint request failed.
///
/// `Display` is the text shown in the endpoint's section.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection broke.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, empty if unknown.
        reason: String,
    },

    /// The body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Decode(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
}

impl FetchError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }

    fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Source of report payloads.
///
/// The view only ever calls [`ReportSource::fetch`] once per endpoint per
/// mount. Implementations must be shareable across tasks.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetches one report.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the failure; callers display it.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, FetchError>;

    /// Human-readable origin shown in the dashboard title.
    fn origin(&self) -> String;
}

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    /// TCP connection timeout.
    pub connect: Duration,
    /// Whole-request timeout.
    pub request: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            request: Duration::from_secs(10),
        }
    }
}

/// [`ReportSource`] backed by the real HTTP API.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpReportSource {
    /// Builds a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Http`] if the underlying client cannot be
    /// constructed (e.g. TLS backend initialisation failed).
    pub fn new(base_url: impl Into<String>, timeouts: ClientTimeouts) -> Result<Self, DashboardError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|e| DashboardError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Base URL every endpoint path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let url = endpoint.url(&self.base_url);
        debug!(endpoint = %endpoint.id, url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint.id, status = status.as_u16(), "non-success status");
            return Err(FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        resp.json::<Value>().await.map_err(FetchError::from_body)
    }

    fn origin(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let t = ClientTimeouts::default();
        assert_eq!(t.connect, Duration::from_secs(3));
        assert_eq!(t.request, Duration::from_secs(10));
    }

    #[test]
    fn test_http_error_display_has_status_and_reason() {
        let err = FetchError::Http {
            status: 500,
            reason: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn test_network_display_keeps_cause() {
        let err = FetchError::Network("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_new_keeps_base_url() {
        let src = HttpReportSource::new("http://127.0.0.1:5000", ClientTimeouts::default())
            .expect("test: build client");
        assert_eq!(src.base_url(), "http://127.0.0.1:5000");
        assert_eq!(src.origin(), "http://127.0.0.1:5000");
    }
}
