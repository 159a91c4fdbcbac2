mod footer;
mod header;
pub mod layout;
mod mobile_menu;
mod sections;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Theme;

pub use sections::max_scroll;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::page()), area);

    let app_layout = layout::compute_layout(area, state);

    header::render(frame, app_layout.header, state);
    if let Some(menu) = app_layout.menu {
        mobile_menu::render(frame, menu, state);
    }
    sections::render(frame, app_layout.content, state);
    footer::render(frame, app_layout.footer, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::section::Section;
    use crate::app::state::NavEvent;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn draw(state: &AppState) -> Buffer {
        let (width, height) = state.viewport;
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state(width: u16, height: u16) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(width, height);
        state
    }

    #[test]
    fn test_home_renders_by_default() {
        let text = screen_text(&draw(&state(120, 30)));
        assert!(text.contains("Onur Yaman"));
        assert!(text.contains("View My Work"));
        assert!(text.contains("Portfolio"));
        assert!(text.contains("All Rights Reserved."));
    }

    #[test]
    fn test_each_section_renders_its_heading() {
        let cases = [
            (Section::About, "About Me"),
            (Section::Skills, "Technical Skills"),
            (Section::Portfolio, "My Work"),
            (Section::Contact, "Get In Touch"),
        ];
        for (section, title) in cases {
            let mut st = state(120, 40);
            st.dispatch(NavEvent::Navigate(section));
            let text = screen_text(&draw(&st));
            assert!(text.contains(title), "{} missing for {}", title, section);
        }
    }

    #[test]
    fn test_active_nav_item_is_highlighted() {
        let mut st = state(120, 30);
        st.dispatch(NavEvent::Navigate(Section::Skills));
        let buffer = draw(&st);
        let targets = layout::header_targets(
            Rect::new(0, 0, 120, 3),
            &st.config.profile.logo,
            false,
        );
        for (rect, target) in targets {
            if let layout::HitTarget::NavItem(section) = target {
                let cell = &buffer[(rect.x, rect.y)];
                if section == Section::Skills {
                    assert_eq!(cell.fg, Theme::ACCENT_CYAN);
                } else {
                    assert_eq!(cell.fg, Theme::TEXT_SECONDARY);
                }
            }
        }
    }

    #[test]
    fn test_status_badge_ends_flush_right() {
        let buffer = draw(&state(120, 30));
        let row: String = (0..120).map(|x| buffer[(x, 29)].symbol()).collect();
        assert!(row.ends_with(" [HOME] "), "{:?}", row);
    }

    #[test]
    fn test_last_page_shows_end_of_section() {
        let mut st = state(60, 20);
        st.dispatch(NavEvent::Navigate(Section::About));
        assert!(!screen_text(&draw(&st)).contains("future of software."));

        st.content_scroll = max_scroll(&st);
        let text = screen_text(&draw(&st));
        assert!(text.contains("future of software."));
    }

    #[test]
    fn test_narrow_menu_shows_dropdown() {
        let mut st = state(60, 30);
        let closed = screen_text(&draw(&st));
        assert!(closed.contains("[≡]"));
        assert!(!closed.contains("Contact"));

        st.dispatch(NavEvent::ToggleMenu);
        let open = screen_text(&draw(&st));
        assert!(open.contains("[✕]"));
        assert!(open.contains("Contact"));
        assert!(open.contains("Skills"));
    }
}
