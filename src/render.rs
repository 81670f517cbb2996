//! # Module: Text Rendering
//!
//! ## Responsibility
//! Turns endpoint results into display text: pretty-printed JSON for loaded
//! reports, the error text for failed ones, a placeholder while pending.
//! Shared by the headless printer and the TUI report pane.
//!
//! ## Guarantees
//! - A loaded section's body is exactly `serde_json::to_string_pretty(payload)`
//! - A failed section never contains payload text
//! - Pure functions; no I/O

use std::time::Duration;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::report::{EndpointResult, ResultStatus};
use crate::view::DashboardView;

/// Placeholder body while a request is in flight.
pub const PENDING_TEXT: &str = "Loading\u{2026}";

/// Prefix of a failed section's body.
pub const ERROR_PREFIX: &str = "Error: ";

/// Pretty-prints a report payload with two-space indentation.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Body text for a section.
pub fn section_body(result: &EndpointResult) -> String {
    match result.status() {
        ResultStatus::Pending => PENDING_TEXT.to_string(),
        ResultStatus::Loaded(value) => pretty_json(value),
        ResultStatus::Failed(message) => format!("{ERROR_PREFIX}{message}"),
    }
}

/// Formats a resolution time, e.g. `"42ms"` or `"1.3s"`.
pub fn elapsed_display(elapsed: Option<Duration>) -> String {
    match elapsed {
        None => String::new(),
        Some(d) if d < Duration::from_secs(1) => format!("{}ms", d.as_millis()),
        Some(d) => format!("{:.1}s", d.as_secs_f64()),
    }
}

/// One-line header: title, path, status and resolution time.
pub fn section_header(endpoint: &Endpoint, result: &EndpointResult) -> String {
    let elapsed = elapsed_display(result.elapsed());
    let mut header = format!(
        "== {} ({}) {} {}",
        endpoint.display_title(),
        endpoint.path,
        result.status().symbol(),
        result.status().label()
    );
    if !elapsed.is_empty() {
        header.push(' ');
        header.push_str(&elapsed);
    }
    header
}

/// Header plus body for one section.
pub fn render_section(endpoint: &Endpoint, result: &EndpointResult) -> String {
    format!(
        "{}\n{}\n",
        section_header(endpoint, result),
        section_body(result)
    )
}

/// Every section in configured order, under a page title.
pub fn render_page(title: &str, view: &DashboardView) -> String {
    let mut page = format!(
        "{title}\nsource: {}  profile: {}  loaded: {}  failed: {}  pending: {}\n\n",
        view.origin(),
        view.profile(),
        view.loaded_count(),
        view.failed_count(),
        view.pending_count()
    );
    for (endpoint, result) in view.sections() {
        page.push_str(&render_section(endpoint, result));
        page.push('\n');
    }
    page
}
