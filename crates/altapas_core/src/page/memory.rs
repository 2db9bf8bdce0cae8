//! In-process page model.
//!
//! # Responsibility
//! - Implement `PageSurface` without a browser for tests and the CLI replay.
//! - Model session history with a cursor so back/forward can be replayed.
//!
//! # Invariants
//! - `history` is never empty; `cursor` always indexes a valid entry.
//! - `push_fragment` drops forward entries, like a browser.
//! - `back`/`forward` only move the cursor; the caller dispatches the
//!   resulting history-pop intent, mirroring the browser `popstate` event.

use crate::model::section::SectionId;
use crate::page::{PageSurface, Transition};

/// One section element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySection {
    pub id: SectionId,
    pub visible: bool,
    /// Last transition applied when revealed.
    pub transition: Option<String>,
}

/// One navigation link element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryLink {
    href: String,
    active: bool,
}

/// Page state held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    sections: Vec<MemorySection>,
    links: Vec<MemoryLink>,
    title: String,
    history: Vec<String>,
    cursor: usize,
    scroll_to_top_count: usize,
    announcements: Vec<String>,
}

impl MemoryPage {
    /// Creates a page with one section and one `#<id>` link per id.
    ///
    /// Every section starts visible, as markup without script would render.
    pub fn new(section_ids: &[&str]) -> Self {
        let links = section_ids.iter().map(|id| format!("#{id}")).collect();
        Self::with_links(section_ids, links)
    }

    /// Creates a page whose navigation links do not mirror the sections.
    pub fn with_links(section_ids: &[&str], link_hrefs: Vec<String>) -> Self {
        Self {
            sections: section_ids
                .iter()
                .map(|id| MemorySection {
                    id: SectionId::new(*id),
                    visible: true,
                    transition: None,
                })
                .collect(),
            links: link_hrefs
                .into_iter()
                .map(|href| MemoryLink {
                    href,
                    active: false,
                })
                .collect(),
            title: String::new(),
            history: vec![String::new()],
            cursor: 0,
            scroll_to_top_count: 0,
            announcements: Vec::new(),
        }
    }

    /// Replaces the initial history entry, as if the page loaded at `fragment`.
    pub fn at_fragment(mut self, fragment: &str) -> Self {
        self.history = vec![fragment.to_string()];
        self.cursor = 0;
        self
    }

    /// Moves one entry back. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn sections(&self) -> &[MemorySection] {
        &self.sections
    }

    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|section| section.visible)
            .map(|section| section.id.as_str())
            .collect()
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.href.as_str())
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn scroll_to_top_count(&self) -> usize {
        self.scroll_to_top_count
    }

    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    fn section_mut(&mut self, id: &SectionId) -> Option<&mut MemorySection> {
        self.sections.iter_mut().find(|section| &section.id == id)
    }
}

impl PageSurface for MemoryPage {
    fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }

    fn hide_section(&mut self, id: &SectionId) {
        if let Some(section) = self.section_mut(id) {
            section.visible = false;
        }
    }

    fn reveal_section(&mut self, id: &SectionId, transition: &Transition) {
        if let Some(section) = self.section_mut(id) {
            section.visible = true;
            section.transition = Some(transition.css());
        }
    }

    fn link_hrefs(&self) -> Vec<String> {
        self.links.iter().map(|link| link.href.clone()).collect()
    }

    fn set_link_active(&mut self, index: usize, active: bool) {
        if let Some(link) = self.links.get_mut(index) {
            link.active = active;
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn fragment(&self) -> String {
        self.history[self.cursor].clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(fragment.to_string());
        self.cursor = self.history.len() - 1;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_to_top_count += 1;
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryPage;
    use crate::page::PageSurface;

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut page = MemoryPage::new(&["home", "menu", "about"]);
        page.push_fragment("#menu");
        page.push_fragment("#about");
        assert!(page.back());
        page.push_fragment("#home");

        assert_eq!(page.history_len(), 3);
        assert_eq!(page.fragment(), "#home");
        assert!(!page.forward());
    }

    #[test]
    fn back_stops_at_first_entry() {
        let mut page = MemoryPage::new(&["home"]).at_fragment("#home");
        assert!(!page.back());
        assert_eq!(page.fragment(), "#home");
    }
}
