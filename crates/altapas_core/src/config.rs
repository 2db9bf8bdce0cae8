//! Site configuration.
//!
//! # Responsibility
//! - Hold every tunable the page behaviours read (titles, timings, thresholds).
//! - Validate host-provided overrides before they reach the controller.
//!
//! # Invariants
//! - `SiteConfig::default()` reproduces the production site and always validates.
//! - Missing fields in an override keep their default value.
//! - `title_for` never fails: unknown sections fall back to the home title.

use crate::logging::normalize_level;
use crate::model::section::{
    SectionId, ABOUT_SECTION_ID, CONTACT_SECTION_ID, HOME_SECTION_ID, MENU_SECTION_ID,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SECTION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("valid section id regex"));

const DEFAULT_TRANSITION_MS: u32 = 500;
const DEFAULT_SLIDE_OFFSET_PX: u32 = 20;
const DEFAULT_DESKTOP_BREAKPOINT_PX: u32 = 768;
const DEFAULT_NAVBAR_HIDE_THRESHOLD_PX: u32 = 100;
const DEFAULT_TOAST_ENTER_DELAY_MS: u32 = 100;
const DEFAULT_TOAST_VISIBLE_MS: u32 = 3000;
const DEFAULT_TOAST_EXIT_MS: u32 = 300;

/// Page-level configuration shared by the controller and the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Section shown when the address bar has no fragment.
    pub home_section: SectionId,
    /// Section targeted by the hero call-to-action.
    pub cta_target: SectionId,
    /// Document title per section id.
    pub titles: BTreeMap<SectionId, String>,
    /// Fade/slide-in duration for a revealed section.
    pub transition_ms: u32,
    /// Vertical offset a revealed section slides in from.
    pub slide_offset_px: u32,
    /// Viewport widths above this close the mobile menu.
    pub desktop_breakpoint_px: u32,
    /// Scrolling down past this offset hides the navbar.
    pub navbar_hide_threshold_px: u32,
    /// Delay before a toast slides in.
    pub toast_enter_delay_ms: u32,
    /// Time from creation until a toast starts sliding out.
    pub toast_visible_ms: u32,
    /// Slide-out duration before the toast node is removed.
    pub toast_exit_ms: u32,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let titles = [
            (
                HOME_SECTION_ID,
                "Al Tapas Lisbon | Authentic Tapas Restaurant in Lisboa",
            ),
            (
                MENU_SECTION_ID,
                "Menu | Al Tapas Lisbon - Authentic Spanish & Portuguese Dishes",
            ),
            (
                ABOUT_SECTION_ID,
                "About Us | Al Tapas - Authentic Iberian Culture in Lisbon",
            ),
            (
                CONTACT_SECTION_ID,
                "Contact | Al Tapas Lisbon - Location & Reservations",
            ),
        ]
        .into_iter()
        .map(|(id, title)| (SectionId::new(id), title.to_string()))
        .collect();

        Self {
            home_section: SectionId::home(),
            cta_target: SectionId::new(MENU_SECTION_ID),
            titles,
            transition_ms: DEFAULT_TRANSITION_MS,
            slide_offset_px: DEFAULT_SLIDE_OFFSET_PX,
            desktop_breakpoint_px: DEFAULT_DESKTOP_BREAKPOINT_PX,
            navbar_hide_threshold_px: DEFAULT_NAVBAR_HIDE_THRESHOLD_PX,
            toast_enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            toast_visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            log_level: crate::logging::default_log_level().to_string(),
        }
    }
}

impl SiteConfig {
    /// Validates ids, title coverage, timings and log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_section_id("home_section", &self.home_section)?;
        validate_section_id("cta_target", &self.cta_target)?;
        for id in self.titles.keys() {
            validate_section_id("titles", id)?;
        }
        if !self.titles.contains_key(&self.home_section) {
            return Err(ConfigError::MissingHomeTitle(self.home_section.clone()));
        }
        if self.transition_ms == 0 {
            return Err(ConfigError::ZeroDuration("transition_ms"));
        }
        if self.toast_exit_ms == 0 {
            return Err(ConfigError::ZeroDuration("toast_exit_ms"));
        }
        if self.toast_visible_ms <= self.toast_enter_delay_ms {
            return Err(ConfigError::ToastWindow {
                enter_delay_ms: self.toast_enter_delay_ms,
                visible_ms: self.toast_visible_ms,
            });
        }
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    /// Document title for `id`, falling back to the home title.
    pub fn title_for(&self, id: &SectionId) -> &str {
        self.titles
            .get(id)
            .or_else(|| self.titles.get(&self.home_section))
            .map_or("", String::as_str)
    }
}

fn validate_section_id(field: &'static str, id: &SectionId) -> Result<(), ConfigError> {
    if SECTION_ID_RE.is_match(id.as_str()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSectionId {
            field,
            value: id.as_str().to_string(),
        })
    }
}

/// Site configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSectionId { field: &'static str, value: String },
    MissingHomeTitle(SectionId),
    ZeroDuration(&'static str),
    ToastWindow { enter_delay_ms: u32, visible_ms: u32 },
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSectionId { field, value } => {
                write!(f, "{field} contains invalid section id: `{value}`")
            }
            Self::MissingHomeTitle(id) => write!(f, "titles has no entry for home section `{id}`"),
            Self::ZeroDuration(field) => write!(f, "{field} must be greater than zero"),
            Self::ToastWindow {
                enter_delay_ms,
                visible_ms,
            } => write!(
                f,
                "toast_visible_ms ({visible_ms}) must be greater than toast_enter_delay_ms ({enter_delay_ms})"
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig};
    use crate::model::section::SectionId;

    #[test]
    fn default_config_validates() {
        SiteConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn title_falls_back_to_home() {
        let config = SiteConfig::default();
        assert_eq!(
            config.title_for(&SectionId::new("gallery")),
            config.title_for(&SectionId::home())
        );
    }

    #[test]
    fn rejects_uppercase_section_id() {
        let config = SiteConfig {
            cta_target: SectionId::new("Menu"),
            ..SiteConfig::default()
        };
        let err = config.validate().expect_err("uppercase id must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidSectionId {
                field: "cta_target",
                ..
            }
        ));
    }
}
