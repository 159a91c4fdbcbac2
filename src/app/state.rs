use crate::app::action::Action;
use crate::app::event::ProjectId;
use crate::app::image::{ProjectImage, PLACEHOLDER_IMAGE};
use crate::app::section::Section;
use crate::config::AppConfig;

/// A navigation input, already resolved to a known section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Nav link, logo, or dropdown row: select the section and close the menu.
    Navigate(Section),
    /// Hamburger button.
    ToggleMenu,
    /// In-page button. Selects the section and leaves the menu alone.
    CallToAction(Section),
}

/// Which section is visible and whether the collapsible menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub section: Section,
    pub menu_open: bool,
}

impl NavState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            menu_open: false,
        }
    }

    pub fn current_section(self) -> Section {
        self.section
    }

    pub fn select(self, section: Section) -> Self {
        Self { section, ..self }
    }

    pub fn toggle(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_on_navigate(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    /// Apply one event. Section change and menu close land together.
    pub fn reduce(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Navigate(section) => self.select(section).close_on_navigate(),
            NavEvent::ToggleMenu => self.toggle(),
            NavEvent::CallToAction(section) => self.select(section),
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub nav: NavState,
    /// Highlighted row in the open dropdown menu.
    pub menu_cursor: usize,
    pub project_cursor: usize,
    pub content_scroll: u16,
    pub images: Vec<ProjectImage>,
    pub viewport: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let start = Section::from_tag(&config.ui.start_section);
        let images = config
            .projects
            .iter()
            .map(|p| ProjectImage::new(p.image.clone(), PLACEHOLDER_IMAGE))
            .collect();
        Self {
            config,
            nav: NavState::new(start),
            menu_cursor: start.index(),
            project_cursor: 0,
            content_scroll: 0,
            images,
            viewport: (0, 0),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn current_section(&self) -> Section {
        self.nav.current_section()
    }

    pub fn dispatch(&mut self, event: NavEvent) {
        let before = self.nav;
        self.nav = before.reduce(event);
        if self.nav.section != before.section {
            self.content_scroll = 0;
        }
        if self.nav.menu_open && !before.menu_open {
            self.menu_cursor = self.nav.section.index();
        }
        self.status_message = None;
        self.dirty = true;
        tracing::debug!(
            ?event,
            section = %self.nav.section,
            menu_open = self.nav.menu_open,
            "navigation"
        );
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.dirty = true;
    }

    /// Narrow terminals get the hamburger and dropdown instead of the inline nav.
    pub fn is_narrow(&self) -> bool {
        self.viewport.0 < self.config.ui.narrow_width
    }

    /// The dropdown is only drawn in narrow mode, even if the flag is set.
    pub fn menu_visible(&self) -> bool {
        self.nav.menu_open && self.is_narrow()
    }

    pub fn menu_move_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn menu_move_down(&mut self) {
        if self.menu_cursor + 1 < Section::ALL.len() {
            self.menu_cursor += 1;
        }
        self.dirty = true;
    }

    pub fn select_prev_project(&mut self) {
        self.project_cursor = self.project_cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn select_next_project(&mut self) {
        if self.project_cursor + 1 < self.config.projects.len() {
            self.project_cursor += 1;
        }
        self.dirty = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.content_scroll = self.content_scroll.saturating_sub(lines);
        self.dirty = true;
    }

    /// Scroll towards the end, never past `max`.
    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.content_scroll = self.content_scroll.saturating_add(lines).min(max);
        self.dirty = true;
    }

    /// Pull the offset back after the content or viewport shrank.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.content_scroll = self.content_scroll.min(max);
    }

    /// Initial probes for every project image.
    pub fn image_probe_actions(&self) -> Vec<Action> {
        if !self.config.portfolio.probe_images {
            return vec![];
        }
        self.images
            .iter()
            .enumerate()
            .filter(|(_, img)| !img.src.is_empty())
            .map(|(project, img)| Action::ProbeImage {
                project,
                url: img.src.clone(),
            })
            .collect()
    }

    pub fn image_loaded(&mut self, project: ProjectId) {
        if let Some(img) = self.images.get_mut(project) {
            img.on_load();
            self.dirty = true;
        }
    }

    /// Record a failed image. The first failure swaps in the placeholder,
    /// which then gets probed in turn.
    pub fn image_failed(&mut self, project: ProjectId) -> Option<Action> {
        let img = self.images.get_mut(project)?;
        self.dirty = true;
        if !img.on_error() {
            return None;
        }
        if !self.config.portfolio.probe_images {
            return None;
        }
        Some(Action::ProbeImage {
            project,
            url: img.src.clone(),
        })
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let hint = match self.current_section() {
            Section::Home => "Enter view my work",
            Section::Portfolio => "↑↓ project  Enter open",
            Section::Contact => "Enter email me",
            Section::About | Section::Skills => "PgUp/PgDn scroll",
        };
        if self.is_narrow() {
            format!("1-5 go  m menu  {}  q quit", hint)
        } else {
            format!("1-5 go  Tab next  {}  q quit", hint)
        }
    }
}
