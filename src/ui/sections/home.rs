use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let profile = &state.config.profile;
    vec![
        Line::default(),
        Line::default(),
        Line::from(Span::styled(profile.name.clone(), Theme::heading())).centered(),
        Line::default(),
        Line::from(Span::styled(profile.tagline.clone(), Theme::subheading())).centered(),
        Line::default(),
        Line::from(Span::styled(profile.headline.clone(), Theme::body())).centered(),
        Line::default(),
        Line::default(),
        Line::from(Span::styled("  View My Work  ", Theme::button())).centered(),
        Line::from(Span::styled("press Enter", Theme::dim())).centered(),
    ]
}
