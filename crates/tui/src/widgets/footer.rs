//! Footer bar rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::layout::split_thirds;

/// Label shown in the left footer region.
const LEFT_LABEL: &str = "Bottom Left";

/// Label shown in the center footer region.
const CENTER_LABEL: &str = "Bottom Center";

/// Label shown in the right footer region.
const RIGHT_LABEL: &str = "Bottom Right";

/// Renders the footer bar.
///
/// Three regions aligned left/center/right; the horizontal rule above
/// the row is a top border on all three regions.
///
/// # Layout
///
/// ```text
/// ─────────────────────────────────────────────
/// Bottom Left      Bottom Center   Bottom Right
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triptych_tui::widgets::render_footer;
///
/// let area = Rect::new(0, 0, 80, 2);
/// let mut buf = Buffer::empty(area);
///
/// render_footer(area, &mut buf);
/// ```
pub fn render_footer(area: Rect, buf: &mut Buffer) {
    let (left_width, center_width, right_width) = split_thirds(area.width);
    let [left, center, right] = Layout::horizontal([
        Constraint::Length(left_width),
        Constraint::Length(center_width),
        Constraint::Length(right_width),
    ])
    .areas(area);

    Paragraph::new(LEFT_LABEL)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::TOP))
        .render(left, buf);

    Paragraph::new(CENTER_LABEL)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP))
        .render(center, buf);

    Paragraph::new(RIGHT_LABEL)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::TOP))
        .render(right, buf);
}
