//! # Module: Demo Report Source
//!
//! ## Responsibility
//! Offline [`ReportSource`] that answers every known endpoint with a canned
//! report after a short, staggered delay. Used by `--demo` so the dashboard
//! can be shown without a running backend, and by tests that need
//! deterministic partial display.
//!
//! ## Guarantees
//! - Same endpoint always yields the same payload and delay
//! - Endpoints marked failing return `HTTP 500`; unknown ids return `HTTP 404`
//!
//! ## NOT Responsible For
//! - Mimicking real backend logic; payloads are illustrative only

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{FetchError, ReportSource};
use crate::endpoint::{Endpoint, EndpointId};

/// Base delay before the first canned report resolves.
const BASE_DELAY_MS: u64 = 150;

/// Additional delay per character of the endpoint id, so sections resolve
/// in a visibly staggered order.
const STAGGER_MS: u64 = 40;

/// Canned-data report source.
#[derive(Debug, Clone)]
pub struct DemoReportSource {
    failing: HashSet<EndpointId>,
    delay_scale: f64,
}

impl Default for DemoReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoReportSource {
    /// Creates a demo source where the season outlook fails, to show the
    /// error path next to loaded sections.
    pub fn new() -> Self {
        let mut failing = HashSet::new();
        failing.insert(EndpointId::new("season"));
        Self {
            failing,
            delay_scale: 1.0,
        }
    }

    /// Replaces the set of endpoints that answer with `HTTP 500`.
    pub fn with_failing<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = EndpointId>,
    {
        self.failing = ids.into_iter().collect();
        self
    }

    /// Scales every delay; `0.0` resolves immediately.
    pub fn with_delay_scale(mut self, scale: f64) -> Self {
        self.delay_scale = scale.max(0.0);
        self
    }

    /// Simulated latency for `id`.
    pub fn delay_for(&self, id: &EndpointId) -> Duration {
        let ms = BASE_DELAY_MS + STAGGER_MS * id.as_str().len() as u64;
        Duration::from_millis((ms as f64 * self.delay_scale) as u64)
    }

    /// Canned payload for `id`, or `None` for unknown endpoints.
    pub fn payload_for(id: &EndpointId) -> Option<Value> {
        let value = match id.as_str() {
            "head_coach" => json!({
                "week": 7,
                "lineup": ["QB Hurts", "RB Robinson", "WR Chase", "TE Kelce"],
                "notes": "Start the hot hand; bench the bye-week players."
            }),
            "gm" | "general_manager" => json!({
                "moves": [{"action": "add", "player": "RB Warren"}, {"action": "drop", "player": "WR Thielen"}],
                "budget_remaining": 62
            }),
            "waiver" => json!({
                "claims": [{"player": "RB Warren", "priority": 1}, {"player": "K Aubrey", "priority": 2}]
            }),
            "scout" => json!({
                "targets": [{"player": "WR Nacua", "grade": "A-"}, {"player": "TE LaPorta", "grade": "B+"}]
            }),
            "learning" => json!({"updated_weights": 14, "accuracy_delta": 0.021}),
            "defense" => json!({"stream": "DST Browns", "matchup_rank": 3}),
            "psycho" => json!({"tilt_index": 0.34, "advice": "Stay the course."}),
            "nightly" => json!({"ran_at": "03:00", "jobs": ["refresh_roster", "refresh_odds"]}),
            "trade" => json!({
                "offers": [{"give": ["WR Chase"], "get": ["RB Hall", "WR Pittman"], "fairness": 0.92}]
            }),
            "decree" => json!({
                "claude": "Start Robinson.",
                "gpt4o": "Start Robinson.",
                "ollama": "Start Warren.",
                "consensus": "Start Robinson (2 of 3)."
            }),
            "season" => json!({"record": "5-2", "playoff_odds": 0.71}),
            "health" => json!({"ok": true, "status": "healthy"}),
            "all" => {
                let parts = [
                    "head_coach",
                    "gm",
                    "waiver",
                    "scout",
                    "learning",
                    "trade",
                ];
                let mut combined = serde_json::Map::new();
                for part in parts {
                    if let Some(v) = Self::payload_for(&EndpointId::new(part)) {
                        combined.insert(part.to_string(), v);
                    }
                }
                Value::Object(combined)
            }
            _ => return None,
        };
        Some(value)
    }
}

#[async_trait]
impl ReportSource for DemoReportSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        tokio::time::sleep(self.delay_for(&endpoint.id)).await;

        if self.failing.contains(&endpoint.id) {
            return Err(FetchError::Http {
                status: 500,
                reason: "Internal Server Error".into(),
            });
        }

        Self::payload_for(&endpoint.id).ok_or(FetchError::Http {
            status: 404,
            reason: "Not Found".into(),
        })
    }

    fn origin(&self) -> String {
        "demo".to_string()
    }
}
