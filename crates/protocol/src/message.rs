//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the event sources and the application state.

use serde::{Deserialize, Serialize};

/// Messages delivered to the application on one logical stream.
///
/// Terminal events (keys, resizes) and background timers (spinner
/// ticks, pretend-work completion) all reduce to one of these before
/// the application sees them.
///
/// # Examples
///
/// ```
/// use triptych_protocol::Message;
///
/// let msg = Message::Tick;
/// assert!(matches!(msg, Message::Tick));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// The terminal was resized to the given dimensions.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
    /// One step of the spinner animation.
    Tick,
    /// The simulated background task finished.
    WorkDone,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use triptych_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Tick.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
