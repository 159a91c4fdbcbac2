use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = copyright(chrono::Local::now().year(), &state.config.profile.name);
    let paragraph = Paragraph::new(Line::from(Span::styled(text, Theme::dim())).centered())
        .style(Theme::header());
    frame.render_widget(paragraph, area);
}

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {} {}. All Rights Reserved.", year, name)
}
