use super::heading;
use crate::app::image::{ImageStatus, ProjectImage};
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = heading("My Work");

    if state.config.projects.is_empty() {
        lines.push(Line::from(Span::styled("No projects yet.", Theme::muted())).centered());
        return lines;
    }

    for (i, project) in state.config.projects.iter().enumerate() {
        let selected = i == state.project_cursor;
        let (marker, title_style) = if selected {
            ("▶ ", Theme::card_selected().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Theme::heading())
        };

        if let Some(image) = state.images.get(i) {
            lines.push(image_line(image));
        }
        lines.push(Line::from(vec![
            Span::styled(marker, Theme::card_selected()),
            Span::styled(project.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(project.description.clone(), Theme::muted())));
        lines.push(match &project.link {
            Some(link) => Line::from(vec![
                Span::styled("View Project →", Theme::link().add_modifier(Modifier::UNDERLINED)),
                Span::styled(format!("  {}", link), Theme::dim()),
            ]),
            None => Line::from(Span::styled("Offline Project", Theme::dim())),
        });
        lines.push(Line::default());
    }
    lines
}

fn image_line(image: &ProjectImage) -> Line<'static> {
    let label = match image.status {
        ImageStatus::Pending => "loading",
        ImageStatus::Loaded if image.is_substituted() => "placeholder",
        ImageStatus::Loaded => "ok",
        ImageStatus::Failed => "unavailable",
    };
    Line::from(vec![
        Span::styled("▣ ", Theme::dim()),
        Span::styled(image.src.clone(), Theme::dim()),
        Span::styled(format!(" [{}]", label), Theme::dim()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::image::PLACEHOLDER_IMAGE;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_image_line_labels() {
        let mut image = ProjectImage::new("https://example.com/a.png", PLACEHOLDER_IMAGE);
        assert!(text(&image_line(&image)).ends_with("[loading]"));
        image.on_load();
        assert!(text(&image_line(&image)).ends_with("[ok]"));

        let mut broken = ProjectImage::new("http://broken.invalid/a.png", PLACEHOLDER_IMAGE);
        broken.on_error();
        broken.on_load();
        let line = text(&image_line(&broken));
        assert!(line.contains(PLACEHOLDER_IMAGE));
        assert!(line.ends_with("[placeholder]"));
        broken.on_error();
        assert!(text(&image_line(&broken)).ends_with("[unavailable]"));
    }
}
