//! Application state management.
//!
//! This module defines the mutable state for the TUI application: the
//! most recently observed terminal dimensions and the busy flag for
//! the simulated background task.

use crate::spinner::Spinner;

/// The application state.
///
/// All fields are owned by the single [`App`](crate::App) instance and
/// mutated only from its update loop; there is no shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Most recently observed terminal width in columns.
    pub width: u16,
    /// Most recently observed terminal height in rows.
    pub height: u16,
    /// Whether the simulated background task is still running.
    pub busy: bool,
    /// Spinner animation cursor, advanced by ticks while busy.
    pub spinner: Spinner,
}

impl AppState {
    /// Creates the startup state: busy, dimensions unknown (0×0).
    ///
    /// The dimensions stay at zero until the first resize event
    /// arrives; terminals deliver one immediately on startup.
    ///
    /// # Examples
    ///
    /// ```
    /// use triptych_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert!(state.busy);
    /// assert_eq!((state.width, state.height), (0, 0));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            busy: true,
            spinner: Spinner::default(),
        }
    }

    /// Records the most recently observed terminal size.
    ///
    /// Values are stored as-is; no minimum size is enforced.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Marks the simulated background task as finished.
    ///
    /// The busy flag never re-arms once cleared.
    pub fn finish_work(&mut self) {
        self.busy = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_busy_with_unknown_size() {
        let state = AppState::new();

        assert!(state.busy);
        assert_eq!(state.width, 0);
        assert_eq!(state.height, 0);
    }

    #[test]
    fn resize_stores_dimensions_as_is() {
        let mut state = AppState::new();

        state.resize(80, 24);
        assert_eq!((state.width, state.height), (80, 24));

        // Degenerate sizes are accepted without clamping
        state.resize(2, 1);
        assert_eq!((state.width, state.height), (2, 1));

        state.resize(0, 0);
        assert_eq!((state.width, state.height), (0, 0));
    }

    #[test]
    fn finish_work_clears_busy_and_stays_cleared() {
        let mut state = AppState::new();
        assert!(state.busy);

        state.finish_work();
        assert!(!state.busy);

        // A duplicate completion is a no-op
        state.finish_work();
        assert!(!state.busy);
    }
}
