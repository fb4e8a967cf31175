//! Spinner animation frames and cursor.
//!
//! The animation itself is nothing more than a fixed glyph sequence
//! stepped forward by tick messages; the cursor freezes wherever it is
//! once ticks stop arriving.

use std::time::Duration;

use ratatui::style::{Color, Style};

/// Dot-cycle animation frames.
pub const FRAMES: &[&str] = &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

/// Frame interval (seven frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(143);

/// Foreground color for the spinner glyph.
pub const SPINNER_COLOR: Color = Color::Indexed(205);

/// Cursor into the spinner frame sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Returns the glyphs for the current frame.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }

    /// Steps to the next frame, wrapping at the end of the sequence.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Style applied to the glyph when rendered.
    #[must_use]
    pub fn style() -> Style {
        Style::default().fg(SPINNER_COLOR)
    }
}
