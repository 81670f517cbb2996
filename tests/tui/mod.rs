//! Integration tests for the TUI dashboard module.
//!
//! These tests verify cross-module interactions: the app driving a mounted
//! view through completion, remount and selection, and full-frame rendering
//! of every section state through a `TestBackend`.

#[cfg(feature = "tui")]
mod app_state;
#[cfg(feature = "tui")]
mod render_frames;
