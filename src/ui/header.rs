use crate::app::section::Section;
use crate::app::state::AppState;
use crate::ui::layout::{self, HitTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::header());
    frame.render_widget(block, area);

    let active = state.current_section();
    let targets = layout::header_targets(area, &state.config.profile.logo, state.is_narrow());

    for (rect, target) in targets {
        let span = match target {
            HitTarget::Logo => Span::styled(state.config.profile.logo.as_str(), Theme::logo()),
            HitTarget::NavItem(section) => nav_label(section, section == active),
            HitTarget::Hamburger => {
                // Close icon while the dropdown is open
                let icon = if state.nav.menu_open { "[✕]" } else { "[≡]" };
                Span::styled(icon, Theme::nav_idle())
            }
            HitTarget::MenuItem(_) => continue,
        };
        frame.render_widget(Paragraph::new(Line::from(span)), rect);
    }
}

fn nav_label(section: Section, active: bool) -> Span<'static> {
    let style = if active {
        Theme::nav_active()
    } else {
        Theme::nav_idle()
    };
    Span::styled(section.label(), style)
}
