use super::heading;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = heading("Technical Skills");
    for category in &state.config.skills {
        lines.push(Line::from(Span::styled(category.name.clone(), Theme::subheading())));
        let mut chips: Vec<Span> = Vec::new();
        for skill in &category.skills {
            chips.push(Span::styled(format!(" {} ", skill), Theme::chip()));
            chips.push(Span::raw("  "));
        }
        chips.pop();
        lines.push(Line::from(chips));
        lines.push(Line::default());
    }
    lines
}
