use std::fmt;

/// One of the five content blocks the portfolio can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Portfolio,
    Contact,
}

impl Section {
    /// Navigation order, as shown in the header and the dropdown menu.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Resolve a section tag such as `"skills"`. Anything outside the known
    /// set lands on `Home` instead of failing.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match Self::ALL.iter().find(|s| s.tag().eq_ignore_ascii_case(tag)) {
            Some(section) => *section,
            None => {
                tracing::warn!(tag, "unknown section, falling back to home");
                Section::Home
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    /// Capitalized label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Portfolio => 3,
            Section::Contact => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        for section in Section::ALL {
            assert_eq!(Section::from_tag(section.tag()), section);
        }
        assert_eq!(Section::from_tag("  Skills "), Section::Skills);
        assert_eq!(Section::from_tag("CONTACT"), Section::Contact);
    }

    #[test]
    fn test_from_tag_unknown_falls_back_to_home() {
        assert_eq!(Section::from_tag(""), Section::Home);
        assert_eq!(Section::from_tag("blog"), Section::Home);
        assert_eq!(Section::from_tag("portfolios"), Section::Home);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
        assert_eq!(Section::About.next(), Section::Skills);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(5), None);
    }
}
