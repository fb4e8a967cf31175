//! Content area rendering widget.
//!
//! The middle row of the frame. While the pretend work runs it shows a
//! centered spinner line; afterwards it shows the instructional phrase
//! and a report of the sizes the layout computed from the current
//! dimensions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::{
    layout::{content_height, split_halves, split_thirds},
    spinner::Spinner,
    state::AppState,
};

/// Status phrase shown while the pretend work is running.
const BUSY_PHRASE: &str = " A lot of important work is being done! ";

/// Instructional phrase shown once the work completes.
const IDLE_PHRASE: &str =
    "Resize me to see window/box sizes change while the top and bottom boxes remain static!";

/// Renders the content area, centered both ways within `area`.
pub fn render_content(state: &AppState, area: Rect, buf: &mut Buffer) {
    let text = if state.busy {
        busy_text(state)
    } else {
        report_text(state)
    };

    let lines = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(center_vertically(area, lines), buf);
}

/// The spinner line: glyph, status phrase, glyph again.
fn busy_text(state: &AppState) -> Text<'static> {
    let glyph = state.spinner.glyph();
    Text::from(Line::from(vec![
        Span::styled(glyph, Spinner::style()),
        Span::raw(BUSY_PHRASE),
        Span::styled(glyph, Spinner::style()),
    ]))
}

/// The instructional phrase plus the size report.
///
/// Reports the stored window dimensions and the left-region width of
/// each bar next to the full content width, so resizing shows all
/// three rows recompute.
fn report_text(state: &AppState) -> Text<'static> {
    let (top_left, _) = split_halves(state.width);
    let (bottom_left, _, _) = split_thirds(state.width);

    Text::from(vec![
        Line::from(IDLE_PHRASE),
        Line::default(),
        Line::from(format!(
            "Window Height: {} Width: {}",
            state.height, state.width
        )),
        Line::default(),
        Line::from(format!("Height (content: {})", content_height(state.height))),
        Line::default(),
        Line::from(format!(
            "Width (top: {}, content: {}, bottom: {})",
            top_left, state.width, bottom_left
        )),
    ])
}

/// Offsets `area` downward so `lines` rows sit in its vertical middle.
fn center_vertically(area: Rect, lines: u16) -> Rect {
    let offset = area.height.saturating_sub(lines) / 2;
    Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: area.height.saturating_sub(offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn busy_content_shows_spinner_and_phrase() {
        let state = AppState::new();
        assert!(state.busy);

        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_content(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("A lot of important work is being done!"));
        assert!(content.contains("∙∙∙"));
    }

    #[test]
    fn busy_line_is_vertically_centered() {
        let state = AppState::new();
        let area = Rect::new(0, 0, 80, 21);
        let mut buf = Buffer::empty(area);

        render_content(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        let row = content
            .lines()
            .position(|line| line.contains("important work"))
            .unwrap();
        assert_eq!(row, 10);
    }

    #[test]
    fn report_shows_window_and_region_sizes() {
        let mut state = AppState::new();
        state.resize(80, 24);
        state.finish_work();

        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_content(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Resize me to see window/box sizes change"));
        assert!(content.contains("Window Height: 24 Width: 80"));
        assert!(content.contains("Height (content: 20)"));
        assert!(content.contains("Width (top: 40, content: 80, bottom: 26)"));
    }

    #[test]
    fn report_reflects_odd_widths() {
        let mut state = AppState::new();
        state.resize(81, 25);
        state.finish_work();

        let area = Rect::new(0, 0, 81, 21);
        let mut buf = Buffer::empty(area);

        render_content(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        // 81/2 leaves a remainder absorbed by the top-left region
        assert!(content.contains("Width (top: 41, content: 81, bottom: 27)"));
        assert!(content.contains("Height (content: 21)"));
    }

    #[test]
    fn degenerate_area_renders_without_panic() {
        let state = AppState::new();

        let area = Rect::new(0, 0, 5, 0);
        let mut buf = Buffer::empty(area);
        render_content(&state, area, &mut buf);

        let area = Rect::new(0, 0, 0, 3);
        let mut buf = Buffer::empty(area);
        render_content(&state, area, &mut buf);
    }
}
