//! Page surface seam.
//!
//! # Responsibility
//! - Describe the page capabilities the navigation controller consumes.
//! - Keep the controller free of any browser dependency.
//!
//! # Invariants
//! - Implementations expose a fixed section and link set for their lifetime.
//! - Visibility, styling and history writes happen only through this trait.
//!
//! # See also
//! - crate::page::memory::MemoryPage (in-process implementation)

pub mod memory;

use crate::config::SiteConfig;
use crate::model::section::SectionId;

/// Fade/slide-in applied to a section when it becomes visible.
///
/// The section starts transparent and offset downwards, then eases to opaque
/// and unshifted. Completion is never awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub offset_px: u32,
}

impl Transition {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            duration_ms: config.transition_ms,
            offset_px: config.slide_offset_px,
        }
    }

    /// CSS `transition` value.
    pub fn css(&self) -> String {
        format!(
            "opacity {ms}ms ease, transform {ms}ms ease",
            ms = self.duration_ms
        )
    }

    /// CSS `transform` before the transition starts.
    pub fn initial_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// CSS `transform` once the transition completes.
    pub fn final_transform(&self) -> &'static str {
        "translateY(0)"
    }
}

/// Page capabilities needed by `SectionNavigator`.
pub trait PageSurface {
    /// Ids of every section element, in document order.
    fn section_ids(&self) -> Vec<SectionId>;
    fn hide_section(&mut self, id: &SectionId);
    /// Makes one section visible and starts `transition` on it.
    fn reveal_section(&mut self, id: &SectionId, transition: &Transition);

    /// `href` attribute of every primary navigation link, in document order.
    fn link_hrefs(&self) -> Vec<String>;
    fn set_link_active(&mut self, index: usize, active: bool);

    fn set_title(&mut self, title: &str);

    /// Current address-bar fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;
    /// Pushes a session-history entry for `fragment` without reloading.
    fn push_fragment(&mut self, fragment: &str);

    fn scroll_to_top(&mut self);

    /// Forwards a polite screen-reader announcement. Optional.
    fn announce(&mut self, _message: &str) {}
}
