//! One renderer per section. The match is total over `Section`, so every
//! state the router can hold has exactly one content block.

mod about;
mod contact;
mod home;
mod portfolio;
mod skills;

use crate::app::section::Section;
use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = paragraph(state).scroll((state.content_scroll, 0));
    frame.render_widget(paragraph, padded(area));
}

/// Largest scroll offset that still keeps the last page of the active
/// section on screen, for the current viewport.
pub fn max_scroll(state: &AppState) -> u16 {
    let (width, height) = state.viewport;
    let content = layout::compute_layout(Rect::new(0, 0, width, height), state).content;
    let area = padded(content);
    let total = paragraph(state).line_count(area.width);
    let total = u16::try_from(total).unwrap_or(u16::MAX);
    total.saturating_sub(area.height)
}

fn paragraph(state: &AppState) -> Paragraph<'static> {
    let lines = match state.current_section() {
        Section::Home => home::lines(state),
        Section::About => about::lines(state),
        Section::Skills => skills::lines(state),
        Section::Portfolio => portfolio::lines(state),
        Section::Contact => contact::lines(state),
    };
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Section title, centered with a blank line after it.
fn heading(text: &str) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(text.to_string(), Theme::heading())).centered(),
        Line::default(),
    ]
}

/// Keep prose off the terminal edges on wide screens.
fn padded(area: Rect) -> Rect {
    let side = if area.width > 100 {
        (area.width - 100) / 2
    } else {
        area.width.min(2) / 2
    };
    Rect::new(area.x + side, area.y, area.width - side * 2, area.height)
}
