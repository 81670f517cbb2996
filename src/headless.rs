//! # Module: Headless Output
//!
//! ## Responsibility
//! Drives a mounted [`DashboardView`] to completion and writes it as plain
//! text, for the `thanos-dashboard` binary and for anything else that wants
//! the dashboard without a terminal UI.
//!
//! ## Exit codes
//!
//! - `0`: every endpoint loaded
//! - `1`: configuration or startup error
//! - `2`: at least one endpoint failed

use std::io::Write;

use tracing::info;

use crate::cli::ConnectArgs;
use crate::render::{render_page, render_section};
use crate::view::DashboardView;
use crate::DashboardError;

/// Process exit code when every endpoint loaded.
pub const EXIT_OK: u8 = 0;

/// Process exit code for configuration or startup errors.
pub const EXIT_STARTUP_ERROR: u8 = 1;

/// Process exit code when at least one endpoint failed.
pub const EXIT_ENDPOINT_FAILED: u8 = 2;

/// Writes the page title, then each section the moment it resolves.
///
/// Sections appear in completion order, not configured order.
///
/// # Returns
/// `Ok(true)` if no endpoint failed.
///
/// # Errors
/// Returns any error from writing to `out`.
pub async fn print_streaming<W: Write>(
    title: &str,
    view: &mut DashboardView,
    out: &mut W,
) -> std::io::Result<bool> {
    writeln!(out, "{title}\n")?;
    let endpoints = view.endpoints().to_vec();
    while let Some(result) = view.next_completion().await {
        let Some(endpoint) = endpoints.iter().find(|e| e.id == result.endpoint_id) else {
            continue;
        };
        writeln!(out, "{}", render_section(endpoint, result))?;
        out.flush()?;
    }
    Ok(view.failed_count() == 0)
}

/// Waits for every section to settle, then writes the whole page in
/// configured order.
///
/// # Returns
/// `Ok(true)` if no endpoint failed.
///
/// # Errors
/// Returns any error from writing to `out`.
pub async fn print_settled<W: Write>(
    title: &str,
    view: &mut DashboardView,
    out: &mut W,
) -> std::io::Result<bool> {
    view.settle().await;
    out.write_all(render_page(title, view).as_bytes())?;
    out.flush()?;
    Ok(view.failed_count() == 0)
}

/// Resolves the config, mounts the view once, and prints it to `out`.
///
/// # Returns
/// `Ok(true)` if every endpoint loaded.
///
/// # Errors
/// Returns [`DashboardError`] if the config is invalid, the source cannot be
/// built, the view cannot mount, or `out` fails.
pub async fn run<W: Write>(
    args: &ConnectArgs,
    wait: bool,
    out: &mut W,
) -> Result<bool, DashboardError> {
    let config = args.resolve_config()?;
    let source = args.report_source(&config)?;
    let mut view = DashboardView::mount(config.endpoint_set(), source)?;

    let title = &config.dashboard.title;
    let ok = if wait {
        print_settled(title, &mut view, out).await?
    } else {
        print_streaming(title, &mut view, out).await?
    };

    info!(
        loaded = view.loaded_count(),
        failed = view.failed_count(),
        "all sections settled"
    );
    view.unmount();
    Ok(ok)
}

/// Maps the outcome of [`run`] onto a process exit code.
pub fn exit_code(outcome: &Result<bool, DashboardError>) -> u8 {
    match outcome {
        Ok(true) => EXIT_OK,
        Ok(false) => EXIT_ENDPOINT_FAILED,
        Err(_) => EXIT_STARTUP_ERROR,
    }
}
