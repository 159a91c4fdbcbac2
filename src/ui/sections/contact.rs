use super::heading;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let profile = &state.config.profile;
    let mut lines = heading("Get In Touch");
    lines.push(Line::from(Span::styled(profile.contact_blurb.clone(), Theme::body())).centered());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("  Email Me  ", Theme::button())).centered());
    lines.push(Line::from(Span::styled(profile.email.clone(), Theme::dim())).centered());
    lines
}
