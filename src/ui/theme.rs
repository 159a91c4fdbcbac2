use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39);
    pub const BG_ELEVATED: Color = Color::Rgb(31, 41, 55);
    pub const BG_CHIP: Color = Color::Rgb(55, 65, 81);
    pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
    pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);
    pub const ACCENT_CYAN_DEEP: Color = Color::Rgb(6, 182, 212);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);
    pub const TEXT_DIM: Color = Color::Rgb(107, 114, 128);

    pub fn page() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_DARK)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn header() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn logo() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Active item in the desktop nav, underlined like a bottom border.
    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn nav_active_menu() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_idle() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn menu_cursor() -> Style {
        Style::default().bg(Self::BG_CHIP)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subheading() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn chip() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_CHIP)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::ACCENT_CYAN_DEEP)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default().fg(Self::ACCENT_CYAN)
    }

    pub fn card_selected() -> Style {
        Style::default().fg(Self::ACCENT_CYAN)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
