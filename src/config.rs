//! Site content and tuning parsed from the embedded `site.json`.
//!
//! Every field has a default, so a partial file only overrides what it
//! names. Validation rejects layouts the scroll resolver can't work with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::state::scroll::ScrollThresholds;
use crate::state::theme::DEFAULT_THEME_KEY;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const DEFAULT_SUCCESS_MESSAGE_MS: u32 = 5000;

const EMBEDDED_SITE: &str = include_str!("../site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has no sections")]
    EmptySections,
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("unknown section id: {0}")]
    UnknownSection(String),
}

/// Sections the page knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Element id of the rendered section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Element id of the skill list, which fades in like a card.
pub const SKILL_LIST_ID: &str = "skill-list";

/// Element id of the project card at `index`.
#[must_use]
pub fn project_card_id(index: usize) -> String {
    format!("project-{index}")
}

/// A page section and its nav label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub title: String,
}

impl SectionLink {
    fn new(id: &str, title: &str) -> Self {
        Self { id: id.to_owned(), title: title.to_owned() }
    }

    /// The rendered section this link points at.
    #[must_use]
    pub fn section(&self) -> Option<PageSection> {
        PageSection::from_id(&self.id)
    }

    /// In-page anchor for this section.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100. Larger values are clamped.
    pub level: u32,
}

impl Skill {
    /// CSS width for the filled part of the skill bar.
    #[must_use]
    pub fn width_percent(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub about: String,
    pub sections: Vec<SectionLink>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub thresholds: ScrollThresholds,
    /// Storage key for the theme preference.
    pub theme_key: String,
    pub success_message: String,
    /// How long the success banner stays up.
    pub success_message_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_owned(),
            tagline: String::new(),
            about: String::new(),
            sections: vec![
                SectionLink::new("home", "Home"),
                SectionLink::new("about", "About"),
                SectionLink::new("skills", "Skills"),
                SectionLink::new("projects", "Projects"),
                SectionLink::new("contact", "Contact"),
            ],
            skills: Vec::new(),
            projects: Vec::new(),
            thresholds: ScrollThresholds::default(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            success_message_ms: DEFAULT_SUCCESS_MESSAGE_MS,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON site description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, an empty section list, a
    /// repeated section id, or an id the page can't render.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_json`].
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Embedded configuration, or the defaults if it fails to load.
    #[must_use]
    pub fn load() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::warn!("{e}; using default site config");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::EmptySections);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.section().is_none() {
                return Err(ConfigError::UnknownSection(section.id.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    /// Section ids in page order.
    #[must_use]
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Sections to render, in page order.
    #[must_use]
    pub fn page_sections(&self) -> Vec<PageSection> {
        self.sections.iter().filter_map(SectionLink::section).collect()
    }

    #[must_use]
    pub fn has_section(&self, section: PageSection) -> bool {
        self.sections.iter().any(|s| s.section() == Some(section))
    }

    /// Ids of the cards that fade in on scroll. Only sections that are
    /// rendered contribute.
    #[must_use]
    pub fn reveal_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        if self.has_section(PageSection::Skills) && !self.skills.is_empty() {
            ids.push(SKILL_LIST_ID.to_owned());
        }
        if self.has_section(PageSection::Projects) {
            ids.extend((0..self.projects.len()).map(project_card_id));
        }
        ids
    }
}
