//! # Module: Endpoint Result
//!
//! ## Responsibility
//! Holds the per-endpoint display slot and enforces its lifecycle:
//! `Pending` until exactly one terminal transition to `Loaded` or `Failed`.
//!
//! ## Guarantees
//! - A terminal result is never mutated again
//! - A loaded result carries a payload and no error; a failed one the reverse
//!
//! ## NOT Responsible For
//! - Fetching (that belongs to `client`)
//! - Formatting for display (that belongs to `render`)

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::endpoint::EndpointId;

/// Lifecycle state of one endpoint's result.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultStatus {
    /// Request issued, not yet resolved.
    Pending,
    /// Request succeeded with a JSON body.
    Loaded(Value),
    /// Request failed; holds the error's textual description.
    Failed(String),
}

impl ResultStatus {
    /// Returns `true` for `Loaded` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Short status label used in section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Loaded(_) => "LOADED",
            Self::Failed(_) => "FAILED",
        }
    }

    /// Returns the display symbol for this status.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pending => "\u{25d0}", // ◐
            Self::Loaded(_) => "\u{25cf}", // ●
            Self::Failed(_) => "\u{25cb}", // ○
        }
    }
}

/// Lifecycle violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A second terminal transition was attempted.
    #[error("result for '{endpoint}' is already resolved")]
    AlreadyResolved {
        /// Endpoint whose slot was already terminal.
        endpoint: EndpointId,
    },
}

/// The display slot for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResult {
    /// Which report this slot belongs to.
    pub endpoint_id: EndpointId,
    status: ResultStatus,
    elapsed: Option<Duration>,
}

impl EndpointResult {
    /// Creates a pending slot.
    pub fn pending(endpoint_id: EndpointId) -> Self {
        Self {
            endpoint_id,
            status: ResultStatus::Pending,
            elapsed: None,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &ResultStatus {
        &self.status
    }

    /// Time from mount to resolution, once terminal.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Payload when loaded.
    pub fn payload(&self) -> Option<&Value> {
        match &self.status {
            ResultStatus::Loaded(v) => Some(v),
            _ => None,
        }
    }

    /// Error text when failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ResultStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns `true` once loaded or failed.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Performs the single terminal transition.
    ///
    /// `Ok(value)` becomes `Loaded`, `Err(text)` becomes `Failed`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::AlreadyResolved`] if the slot is already
    /// terminal. The slot is left untouched in that case.
    pub fn resolve(
        &mut self,
        outcome: Result<Value, String>,
        elapsed: Duration,
    ) -> Result<(), ReportError> {
        if self.is_terminal() {
            return Err(ReportError::AlreadyResolved {
                endpoint: self.endpoint_id.clone(),
            });
        }
        self.status = match outcome {
            Ok(value) => ResultStatus::Loaded(value),
            Err(message) => ResultStatus::Failed(message),
        };
        self.elapsed = Some(elapsed);
        Ok(())
    }
}
