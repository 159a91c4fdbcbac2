use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::section::Section;
use crate::app::state::*;
use crate::ui::{self, layout::{self, HitTarget}};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

const PAGE_LINES: u16 = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ImageLoaded { project } => {
            state.image_loaded(project);
            vec![]
        }
        AppEvent::ImageFailed { project, error } => {
            tracing::debug!(project, %error, "image probe failed");
            state.image_failed(project).into_iter().collect()
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) if state.config.ui.mouse => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(width, height);
            let max = ui::max_scroll(state);
            state.clamp_scroll(max);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The open dropdown takes the arrow keys, Enter and Esc
    if state.menu_visible() {
        match key.code {
            KeyCode::Up => {
                state.menu_move_up();
                return vec![];
            }
            KeyCode::Down => {
                state.menu_move_down();
                return vec![];
            }
            KeyCode::Enter => {
                if let Some(section) = Section::from_index(state.menu_cursor) {
                    state.dispatch(NavEvent::Navigate(section));
                }
                return vec![];
            }
            KeyCode::Esc => {
                state.dispatch(NavEvent::ToggleMenu);
                return vec![];
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(index) {
                state.dispatch(NavEvent::Navigate(section));
            }
            vec![]
        }
        KeyCode::Char(c @ ('h' | 'a' | 's' | 'p' | 'c')) => {
            let section = Section::ALL
                .into_iter()
                .find(|s| s.tag().starts_with(c))
                .unwrap_or_default();
            state.dispatch(NavEvent::Navigate(section));
            vec![]
        }
        KeyCode::Tab | KeyCode::Right => {
            let next = state.current_section().next();
            state.dispatch(NavEvent::Navigate(next));
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            let prev = state.current_section().prev();
            state.dispatch(NavEvent::Navigate(prev));
            vec![]
        }
        KeyCode::Char('m') if state.is_narrow() => {
            state.dispatch(NavEvent::ToggleMenu);
            vec![]
        }
        KeyCode::PageUp => {
            state.scroll_up(PAGE_LINES);
            vec![]
        }
        KeyCode::PageDown => {
            let max = ui::max_scroll(state);
            state.scroll_down(PAGE_LINES, max);
            vec![]
        }
        KeyCode::Up => {
            if state.current_section() == Section::Portfolio {
                state.select_prev_project();
            } else {
                state.scroll_up(1);
            }
            vec![]
        }
        KeyCode::Down => {
            if state.current_section() == Section::Portfolio {
                state.select_next_project();
            } else {
                let max = ui::max_scroll(state);
                state.scroll_down(1, max);
            }
            vec![]
        }
        KeyCode::Enter => activate(state),
        KeyCode::Char('o') if state.current_section() == Section::Portfolio => open_project(state),
        KeyCode::Char('e') if state.current_section() == Section::Contact => compose_mail(state),
        _ => vec![],
    }
}

/// Enter on a section: its call-to-action button.
fn activate(state: &mut AppState) -> Vec<Action> {
    match state.current_section() {
        Section::Home => {
            state.dispatch(NavEvent::CallToAction(Section::Portfolio));
            vec![]
        }
        Section::Portfolio => open_project(state),
        Section::Contact => compose_mail(state),
        Section::About | Section::Skills => vec![],
    }
}

fn open_project(state: &mut AppState) -> Vec<Action> {
    let Some(project) = state.config.projects.get(state.project_cursor) else {
        return vec![];
    };
    match &project.link {
        Some(url) => vec![Action::OpenUrl { url: url.clone() }],
        None => {
            state.status_message = Some(format!("{} is an offline project", project.title));
            state.dirty = true;
            vec![]
        }
    }
}

fn compose_mail(state: &mut AppState) -> Vec<Action> {
    vec![Action::ComposeMail {
        address: state.config.profile.email.clone(),
    }]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout::hit_test(state, mouse.column, mouse.row) {
                Some(HitTarget::Logo) => state.dispatch(NavEvent::Navigate(Section::Home)),
                Some(HitTarget::NavItem(section)) | Some(HitTarget::MenuItem(section)) => {
                    state.dispatch(NavEvent::Navigate(section))
                }
                Some(HitTarget::Hamburger) => state.dispatch(NavEvent::ToggleMenu),
                None => {}
            }
            vec![]
        }
        MouseEventKind::ScrollUp => {
            state.scroll_up(1);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            let max = ui::max_scroll(state);
            state.scroll_down(1, max);
            vec![]
        }
        _ => vec![],
    }
}
