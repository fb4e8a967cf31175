//! Terminal UI for the triptych application.
//!
//! This crate provides a Ratatui-based terminal interface showing a
//! three-row responsive layout: a header bar, a dynamically sized
//! content area, and a footer bar. While a simulated background task
//! runs, the content area shows a spinner; once the task completes it
//! shows a report of the computed region sizes instead.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`spinner`]: Spinner animation frames and cursor
//! - [`layout`]: Region sizing arithmetic
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling, key mappings, and background timers
//! - [`widgets`]: Rendering functions for the three rows
//!
//! # Example
//!
//! ```no_run
//! use triptych_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new();
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod spinner;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, Command};
pub use state::AppState;
