use super::heading;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = heading("About Me");
    for (i, paragraph) in state.config.profile.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(paragraph.clone(), Theme::body())));
    }
    lines
}
