//! Header bar rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::layout::split_halves;

/// Label shown in the left header region.
const LEFT_LABEL: &str = "Top Left";

/// Label shown in the right header region.
const RIGHT_LABEL: &str = "Top Right";

/// Renders the header bar.
///
/// Two regions side by side with labels pushed to the outer edges; the
/// horizontal rule under the row is nothing but a bottom border on
/// both regions.
///
/// # Layout
///
/// ```text
/// Top Left                       Top Right
/// ─────────────────────────────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use triptych_tui::widgets::render_header;
///
/// let area = Rect::new(0, 0, 80, 2);
/// let mut buf = Buffer::empty(area);
///
/// render_header(area, &mut buf);
/// ```
pub fn render_header(area: Rect, buf: &mut Buffer) {
    let (left_width, right_width) = split_halves(area.width);
    let [left, right] = Layout::horizontal([
        Constraint::Length(left_width),
        Constraint::Length(right_width),
    ])
    .areas(area);

    Paragraph::new(LEFT_LABEL)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::BOTTOM))
        .render(left, buf);

    Paragraph::new(RIGHT_LABEL)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM))
        .render(right, buf);
}
