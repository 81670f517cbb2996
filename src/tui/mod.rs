//! # Module: TUI Dashboard
//!
//! ## Responsibility
//! Terminal rendition of the dashboard view using Ratatui: a section list
//! with per-endpoint status, a scrollable report pane showing the selected
//! section's JSON or error text, and a log tail of view lifecycle events.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic
//! - Sections repaint as soon as their request resolves (10fps frame loop)
//!
//! ## NOT Responsible For
//! - Issuing requests (delegates to `view`)
//! - Interpreting report payloads (shown verbatim)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
