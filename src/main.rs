//! Headless dashboard for thanos-dashboard
//!
//! Mounts the configured endpoint set once and prints each section to stdout
//! as soon as it resolves. With `--wait`, prints the whole page in configured
//! order after every section has settled.
//!
//! ## Exit codes
//!
//! - `0`: every endpoint loaded
//! - `1`: configuration or startup error
//! - `2`: at least one endpoint failed
//!
//! ## Environment Variables
//!
//! - `THANOS_BASE_URL`: backend base URL (overridden by `--base-url`)
//! - `LOG_FORMAT=json`: structured JSON logs on stderr
//! - `RUST_LOG=info`: log level filter (default: info)

use std::process::ExitCode;

use clap::Parser;
use thanos_dashboard::cli::ConnectArgs;
use thanos_dashboard::headless;
use thanos_dashboard::init_tracing;
use tracing::error;

/// Print Thanos fantasy-football reports to stdout.
#[derive(Debug, Parser)]
#[command(name = "thanos-dashboard", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Print all sections in configured order once every request settles.
    #[arg(long)]
    wait: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = init_tracing();
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    let outcome = headless::run(&cli.connect, cli.wait, &mut stdout).await;
    if let Err(e) = &outcome {
        error!(error = %e, "dashboard failed to start");
        eprintln!("thanos-dashboard: {e}");
    }
    ExitCode::from(headless::exit_code(&outcome))
}
