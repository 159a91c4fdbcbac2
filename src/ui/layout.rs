use crate::app::section::Section;
use crate::app::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

const HEADER_HEIGHT: u16 = 3;
const NAV_GAP: u16 = 3;
pub const HAMBURGER_WIDTH: u16 = 3;

pub struct AppLayout {
    pub header: Rect,
    pub menu: Option<Rect>,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Something clickable in the header or the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Logo,
    NavItem(Section),
    Hamburger,
    MenuItem(Section),
}

pub fn compute_layout(area: Rect, state: &AppState) -> AppLayout {
    let menu_height = if state.menu_visible() {
        Section::ALL.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Length(menu_height),   // Dropdown menu
            Constraint::Min(3),                // Section content
            Constraint::Length(1),             // Footer
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        menu: (menu_height > 0).then_some(chunks[1]),
        content: chunks[2],
        footer: chunks[3],
        status_bar: chunks[4],
    }
}

/// Inside of the header border, where the logo and nav sit.
fn header_row(header: Rect) -> Rect {
    Rect::new(
        header.x.saturating_add(1),
        header.y.saturating_add(1),
        header.width.saturating_sub(2),
        header.height.saturating_sub(2).min(1),
    )
}

/// Clickable regions of the header. The header is drawn from these same
/// rectangles, so what is clickable is exactly what is shown.
pub fn header_targets(header: Rect, logo: &str, narrow: bool) -> Vec<(Rect, HitTarget)> {
    let row = header_row(header);
    if row.width == 0 || row.height == 0 {
        return vec![];
    }

    let mut targets = Vec::new();
    let logo_w = (logo.width() as u16).min(row.width.saturating_sub(1));
    let logo_rect = Rect::new(row.x + 1, row.y, logo_w, 1);
    targets.push((logo_rect, HitTarget::Logo));
    let min_x = logo_rect.right() + 1;

    if narrow {
        if row.width > HAMBURGER_WIDTH + 1 {
            let x = row.right() - HAMBURGER_WIDTH - 1;
            if x >= min_x {
                targets.push((Rect::new(x, row.y, HAMBURGER_WIDTH, 1), HitTarget::Hamburger));
            }
        }
        return targets;
    }

    let widths: Vec<u16> = Section::ALL.iter().map(|s| s.label().width() as u16).collect();
    let total: u16 = widths.iter().sum::<u16>() + NAV_GAP * (widths.len() as u16 - 1);
    let mut x = row.right().saturating_sub(total + 1).max(min_x);
    for (section, w) in Section::ALL.iter().zip(widths) {
        if x + w > row.right() {
            break;
        }
        targets.push((Rect::new(x, row.y, w, 1), HitTarget::NavItem(*section)));
        x += w + NAV_GAP;
    }
    targets
}

/// One clickable row per section inside the dropdown border.
pub fn menu_targets(menu: Rect) -> Vec<(Rect, HitTarget)> {
    let inner_x = menu.x.saturating_add(1);
    let inner_w = menu.width.saturating_sub(2);
    let rows = menu.height.saturating_sub(2);
    Section::ALL
        .iter()
        .take(rows as usize)
        .enumerate()
        .map(|(i, section)| {
            (
                Rect::new(inner_x, menu.y + 1 + i as u16, inner_w, 1),
                HitTarget::MenuItem(*section),
            )
        })
        .collect()
}

/// Resolve a mouse position against the current viewport.
pub fn hit_test(state: &AppState, column: u16, row: u16) -> Option<HitTarget> {
    let (width, height) = state.viewport;
    let layout = compute_layout(Rect::new(0, 0, width, height), state);
    let pos = Position::new(column, row);

    let mut targets = header_targets(layout.header, &state.config.profile.logo, state.is_narrow());
    if let Some(menu) = layout.menu {
        targets.extend(menu_targets(menu));
    }
    targets
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NavEvent;
    use crate::config::AppConfig;

    fn state_with_viewport(width: u16, height: u16) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(width, height);
        state
    }

    #[test]
    fn test_wide_header_has_all_nav_items() {
        let header = Rect::new(0, 0, 120, 3);
        let targets = header_targets(header, "⟨OY⟩", false);
        let sections: Vec<_> = targets
            .iter()
            .filter_map(|(_, t)| match t {
                HitTarget::NavItem(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(sections, Section::ALL.to_vec());
        assert_eq!(targets[0].1, HitTarget::Logo);
        assert!(!targets.iter().any(|(_, t)| *t == HitTarget::Hamburger));
        for pair in targets.windows(2) {
            assert!(pair[0].0.right() <= pair[1].0.x);
        }
    }

    #[test]
    fn test_narrow_header_has_hamburger_only() {
        let targets = header_targets(Rect::new(0, 0, 50, 3), "⟨OY⟩", true);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[1].1, HitTarget::Hamburger);
        assert_eq!(targets[1].0.right(), 50 - 2);
    }

    #[test]
    fn test_menu_only_laid_out_when_open_and_narrow() {
        let mut state = state_with_viewport(60, 30);
        assert!(compute_layout(Rect::new(0, 0, 60, 30), &state).menu.is_none());
        state.dispatch(NavEvent::ToggleMenu);
        let layout = compute_layout(Rect::new(0, 0, 60, 30), &state);
        let menu = layout.menu.unwrap();
        assert_eq!(menu.y, 3);
        assert_eq!(menu.height, 7);
        assert_eq!(layout.content.y, 10);
    }

    #[test]
    fn test_hit_test_nav_item_and_logo() {
        let state = state_with_viewport(120, 30);
        let targets = header_targets(Rect::new(0, 0, 120, 3), &state.config.profile.logo, false);
        let (rect, _) = targets
            .iter()
            .find(|(_, t)| *t == HitTarget::NavItem(Section::Skills))
            .unwrap();
        assert_eq!(hit_test(&state, rect.x, 1), Some(HitTarget::NavItem(Section::Skills)));
        assert_eq!(hit_test(&state, 2, 1), Some(HitTarget::Logo));
        assert_eq!(hit_test(&state, 1, 1), None);
        assert_eq!(hit_test(&state, 1, 10), None);
    }

    #[test]
    fn test_hit_test_menu_rows() {
        let mut state = state_with_viewport(60, 30);
        state.dispatch(NavEvent::ToggleMenu);
        assert_eq!(hit_test(&state, 10, 4), Some(HitTarget::MenuItem(Section::Home)));
        assert_eq!(hit_test(&state, 10, 8), Some(HitTarget::MenuItem(Section::Contact)));
        assert_eq!(hit_test(&state, 10, 9), None);
    }
}
