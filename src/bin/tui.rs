//! # Binary: TUI Dashboard
//!
//! ## Responsibility
//! Entry point for the Thanos terminal dashboard. Mounts the view once,
//! runs the frame loop, and restores the terminal on exit.
//!
//! ## Usage
//! ```bash
//! cargo run --bin tui -- --demo                        # canned reports
//! cargo run --bin tui -- --base-url http://127.0.0.1:5000
//! cargo run --bin tui -- --profile full --timeout-ms 5000
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C; in-flight requests are aborted
//! - Logs never go to stdout; lifecycle events show in the log pane instead

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use thanos_dashboard::cli::ConnectArgs;
use thanos_dashboard::tui::app::App;
use thanos_dashboard::tui::events::{apply_event, poll_event};
use thanos_dashboard::tui::ui;
use thanos_dashboard::DashboardView;

/// Render refresh rate: 10 frames per second.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal dashboard for the Thanos fantasy-football backend.
#[derive(Debug, Parser)]
#[command(name = "tui", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,
}

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.connect.resolve_config()?;
    let source = cli.connect.report_source(&config)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    // Fetch tasks run on the worker threads; the frame loop stays on this one.
    let _guard = rt.enter();

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let view = DashboardView::mount(config.endpoint_set(), source)?;
    let mut app = App::new(config.dashboard.title.clone(), view);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // Dropping the app unmounts the view before the runtime shuts down.
    drop(app);

    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Runs the frame loop until the user quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.on_tick();
        let frame = terminal.draw(|f| ui::draw(f, app))?;
        app.set_report_area(ui::layout(frame.area).report);

        let event = poll_event(TICK_RATE);
        apply_event(app, event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
