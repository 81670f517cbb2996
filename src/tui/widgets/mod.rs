//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Individual rendering widgets for each dashboard region. Each widget is a pure
//! function that takes app state and a layout rect, and renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle an empty endpoint set gracefully
//! - No widget panics on any input
//! - Status colors are consistent across widgets

pub mod log;
pub mod report;
pub mod sections;
