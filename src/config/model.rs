//! Configuration data model.
//!
//! The config file is read-only input: structs deserialize from TOML and
//! are never written back. Every field has a default, and the defaults are
//! the portfolio's own content, so the application works out of the box
//! with no config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default = "default_skills")]
    pub skills: Vec<SkillCategory>,
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            profile: ProfileConfig::default(),
            skills: default_skills(),
            projects: default_projects(),
            portfolio: PortfolioConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Layout and startup behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminals narrower than this many columns get the collapsible menu.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
    /// Section shown at launch. Unknown values start on home.
    #[serde(default = "default_start_section")]
    pub start_section: String,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            narrow_width: default_narrow_width(),
            start_section: default_start_section(),
            mouse: true,
        }
    }
}

/// Who the portfolio belongs to, and the prose around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Short text mark drawn in the header; clicking it goes home.
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_contact_blurb")]
    pub contact_blurb: String,
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            logo: default_logo(),
            tagline: default_tagline(),
            headline: default_headline(),
            about: default_about(),
            contact_blurb: default_contact_blurb(),
            email: default_email(),
        }
    }
}

/// A titled group of skills, rendered as chips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A portfolio card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// External demo; projects without one are shown as offline.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: String,
}

/// Image probing for portfolio cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_true")]
    pub probe_images: bool,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            probe_images: true,
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_narrow_width() -> u16 {
    80
}

fn default_start_section() -> String {
    "home".to_string()
}

fn default_name() -> String {
    "Onur Yaman".to_string()
}

fn default_logo() -> String {
    "⟨OY⟩".to_string()
}

fn default_tagline() -> String {
    "Data Analytics & Software Development".to_string()
}

fn default_headline() -> String {
    "Delivering high business value from data and software".to_string()
}

fn default_about() -> Vec<String> {
    vec![
        "As a mathematics graduate, my journey into the world of technology is driven by a \
         deep-rooted passion for research and problem-solving. I thrive on transforming complex \
         data into actionable insights and robust software solutions. My background has equipped \
         me with a unique analytical lens, allowing me to design predictive models and build \
         data-centric applications with precision and efficiency."
            .to_string(),
        "My path has been defined by resilience and a relentless drive to succeed. I am a \
         self-motivated and disciplined professional, confident in my ability to take initiative, \
         make decisive technical choices, and see them through to implementation. I excel at \
         integrating mathematical concepts into scripts and have a strong command of the entire \
         software development lifecycle (SDLC)."
            .to_string(),
        "I am committed to continuous learning and am always eager to master the intricacies of \
         the industry. My goal is to apply my skills in data science and business analytics to \
         help build the future of software."
            .to_string(),
    ]
}

fn default_contact_blurb() -> String {
    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of \
     an ambitious team. Feel free to reach out."
        .to_string()
}

fn default_email() -> String {
    "onur.yaman0090@gmail.com".to_string()
}

fn default_skills() -> Vec<SkillCategory> {
    let category = |name: &str, skills: &[&str]| SkillCategory {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        category(
            "Languages & Databases",
            &["C", "C++", "C#/.NET", "Python", "SQL (MySQL, PostgreSQL)", "MATLAB"],
        ),
        category("Cloud & DevOps", &["AWS", "Azure", "Docker", "Kubernetes", "Git"]),
        category("Platforms & APIs", &["Windows", "Linux (Ubuntu)", "REST", "gRPC"]),
    ]
}

fn default_projects() -> Vec<ProjectConfig> {
    vec![ProjectConfig {
        title: "Vision with AI".into(),
        description: "An intelligent, real-time video processing application. Leveraging a \
            sophisticated microservices architecture, it analyzes camera feeds to perform face \
            detection, emotion analysis, and gesture recognition. The system was designed for \
            minimal resource consumption and deployed on Azure using Docker and Kubernetes. A \
            high-performance version utilizing WebRTC over GStreamer is also available. Both are \
            available for live demonstration upon request. This work is designed to serve as both \
            a foundation and an initial approach, providing a clear starting point for future \
            applications."
            .into(),
        link: Some("http://vision.onuryaman.info".into()),
        image: "https://placehold.co/600x400/1a202c/FFFFFF?text=Vision+AI".into(),
    }]
}

fn default_probe_timeout_ms() -> u64 {
    3000
}

fn default_log_dir() -> String {
    "~/.local/share/folio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_portfolio_content() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.profile.name, "Onur Yaman");
        assert_eq!(cfg.profile.about.len(), 3);
        assert_eq!(cfg.skills.len(), 3);
        assert_eq!(cfg.skills[0].name, "Languages & Databases");
        assert_eq!(cfg.skills[1].skills, vec!["AWS", "Azure", "Docker", "Kubernetes", "Git"]);
        assert_eq!(cfg.projects.len(), 1);
        assert_eq!(cfg.projects[0].link.as_deref(), Some("http://vision.onuryaman.info"));
        assert_eq!(cfg.ui.start_section, "home");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            narrow_width = 100

            [profile]
            name = "Ada Lovelace"

            [[projects]]
            title = "Analytical Engine notes"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.narrow_width, 100);
        assert!(cfg.ui.mouse);
        assert_eq!(cfg.profile.name, "Ada Lovelace");
        assert_eq!(cfg.profile.email, "onur.yaman0090@gmail.com");
        assert_eq!(cfg.projects.len(), 1);
        assert_eq!(cfg.projects[0].link, None);
        assert!(cfg.projects[0].image.is_empty());
        assert_eq!(cfg.skills.len(), 3);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.narrow_width, 80);
        assert_eq!(cfg.projects, default_projects());
        assert_eq!(cfg.portfolio.probe_timeout_ms, 3000);
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let cfg: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg.skills, default_skills());
        assert_eq!(cfg.profile.logo, default_logo());
    }
}
