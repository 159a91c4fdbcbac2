use crate::app::state::AppState;
use crate::ui::layout::{self, HitTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Dropdown list of sections, drawn under the header in narrow mode.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::header());
    frame.render_widget(block, area);

    let active = state.current_section();
    for (i, (rect, target)) in layout::menu_targets(area).into_iter().enumerate() {
        let HitTarget::MenuItem(section) = target else {
            continue;
        };
        let style = if section == active {
            Theme::nav_active_menu()
        } else {
            Theme::nav_idle()
        };
        let mut paragraph = Paragraph::new(Line::from(Span::styled(section.label(), style)).centered());
        if i == state.menu_cursor {
            paragraph = paragraph.style(Theme::menu_cursor());
        }
        frame.render_widget(paragraph, rect);
    }
}
