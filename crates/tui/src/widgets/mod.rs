//! Widget components for the triptych TUI.
//!
//! This module provides the rendering functions for the three rows of
//! the frame, organized into one focused submodule per row.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. This
//! enables easy testing and composition.
//!
//! # Modules
//!
//! - [`header`]: Renders the top bar with its two labeled regions
//! - [`content`]: Renders the middle area (spinner or size report)
//! - [`footer`]: Renders the bottom bar with its three labeled regions
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use triptych_tui::widgets;
//!
//! let area = Rect::new(0, 0, 80, 2);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_header(area, &mut buf);
//! ```

pub mod content;
pub mod footer;
pub mod header;

// Re-export primary rendering functions for convenience
pub use content::render_content;
pub use footer::render_footer;
pub use header::render_header;
