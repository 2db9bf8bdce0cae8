//! Section navigation controller.
//!
//! # Responsibility
//! - Own the active section and mirror it into the page surface.
//! - Handle `NavCommand`s one at a time, each to completion.
//!
//! # Invariants
//! - `active_section` is the source of truth; page visibility is derived from it.
//! - `activate` hides every known section before revealing the target, so a
//!   rapid sequence of commands is last-write-wins.
//! - An unknown section id leaves every section hidden and only logs a warning.
//! - History is written only for commands that request it; fragment
//!   resolution reads history and never writes it.

use crate::chrome::announce::announcement_for;
use crate::config::SiteConfig;
use crate::model::section::SectionId;
use crate::nav::fragment::section_from_fragment;
use crate::nav::intent::{NavCommand, NavigateOptions, NavigationIntent};
use crate::page::{PageSurface, Transition};
use log::{debug, info, warn};

/// Result of one activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The section exists and is now the only visible one.
    Shown,
    /// No section carries the id; every section is hidden.
    Missing,
}

/// Single-active-section controller bound to one page.
pub struct SectionNavigator<P: PageSurface> {
    page: P,
    config: SiteConfig,
    sections: Vec<SectionId>,
    transition: Transition,
    active_section: Option<SectionId>,
}

impl<P: PageSurface> SectionNavigator<P> {
    /// Binds the controller to `page`, reading the section set once.
    pub fn new(page: P, config: SiteConfig) -> Self {
        let sections = page.section_ids();
        let transition = Transition::from_config(&config);
        info!(
            "event=nav_init module=nav status=ok sections={} home={}",
            sections.len(),
            config.home_section
        );
        Self {
            page,
            config,
            sections,
            transition,
            active_section: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Currently visible section, or `None` before the first activation and
    /// after an unknown id was requested.
    pub fn active_section(&self) -> Option<&SectionId> {
        self.active_section.as_ref()
    }

    /// Hides every section, then reveals `id` and updates the title.
    ///
    /// Unknown ids leave the page blank and keep the previous title.
    pub fn activate(&mut self, id: &SectionId) -> ActivationOutcome {
        for section in &self.sections {
            self.page.hide_section(section);
        }

        if !self.sections.contains(id) {
            self.active_section = None;
            warn!(
                "event=section_missing module=nav status=degraded section={:?}",
                id.as_str()
            );
            return ActivationOutcome::Missing;
        }

        self.page.reveal_section(id, &self.transition);
        let title = self.config.title_for(id).to_string();
        self.page.set_title(&title);
        self.page.announce(&announcement_for(id));
        self.active_section = Some(id.clone());
        debug!("event=section_shown module=nav status=ok section={id}");
        ActivationOutcome::Shown
    }

    /// Marks the links pointing at `#<id>` active and clears every other link.
    pub fn set_active_link(&mut self, id: &SectionId) {
        let target = id.fragment();
        for (index, href) in self.page.link_hrefs().iter().enumerate() {
            self.page.set_link_active(index, *href == target);
        }
    }

    /// Activates `id`, marks its link, then applies the requested side effects.
    pub fn navigate(&mut self, id: &SectionId, options: NavigateOptions) -> ActivationOutcome {
        let outcome = self.activate(id);
        self.set_active_link(id);
        if options.update_history {
            self.page.push_fragment(&id.fragment());
        }
        if options.scroll_to_top {
            self.page.scroll_to_top();
        }
        outcome
    }

    /// Shows the section named by the address-bar fragment (home when empty).
    pub fn resolve_initial(&mut self) -> ActivationOutcome {
        let fragment = self.page.fragment();
        let id = section_from_fragment(&fragment, &self.config.home_section);
        debug!(
            "event=fragment_resolved module=nav status=ok fragment={fragment:?} section={id}"
        );
        self.navigate(&id, NavigateOptions::default())
    }

    /// Handles one command to completion.
    pub fn dispatch(&mut self, command: NavCommand) -> ActivationOutcome {
        match command {
            NavCommand::ActivateSection { id, options } => self.navigate(&id, options),
            NavCommand::ResolveInitial => self.resolve_initial(),
        }
    }

    /// Maps `intent` to a command and dispatches it.
    ///
    /// Returns `None` when the intent does not navigate (e.g. an external link).
    pub fn handle_intent(&mut self, intent: &NavigationIntent) -> Option<ActivationOutcome> {
        let Some(command) = intent.to_command(&self.config) else {
            debug!(
                "event=intent_ignored module=nav status=skipped intent={}",
                intent.label()
            );
            return None;
        };
        debug!(
            "event=intent_received module=nav status=ok intent={}",
            intent.label()
        );
        Some(self.dispatch(command))
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivationOutcome, SectionNavigator};
    use crate::config::SiteConfig;
    use crate::model::section::SectionId;
    use crate::page::memory::MemoryPage;

    fn navigator() -> SectionNavigator<MemoryPage> {
        SectionNavigator::new(
            MemoryPage::new(&["home", "menu", "about", "contact"]),
            SiteConfig::default(),
        )
    }

    #[test]
    fn activate_tracks_active_section() {
        let mut nav = navigator();
        assert_eq!(nav.active_section(), None);

        assert_eq!(
            nav.activate(&SectionId::new("menu")),
            ActivationOutcome::Shown
        );
        assert_eq!(nav.active_section(), Some(&SectionId::new("menu")));

        assert_eq!(
            nav.activate(&SectionId::new("specials")),
            ActivationOutcome::Missing
        );
        assert_eq!(nav.active_section(), None);
    }

    #[test]
    fn missing_section_keeps_previous_title() {
        let mut nav = navigator();
        nav.activate(&SectionId::new("about"));
        let about_title = nav.page().title().to_string();

        nav.activate(&SectionId::new("nowhere"));
        assert_eq!(nav.page().title(), about_title);
        assert!(nav.page().visible_sections().is_empty());
    }

    #[test]
    fn reveal_records_transition() {
        let mut nav = navigator();
        nav.activate(&SectionId::new("contact"));
        let contact = nav
            .page()
            .sections()
            .iter()
            .find(|section| section.id.as_str() == "contact")
            .expect("contact section exists");
        assert_eq!(
            contact.transition.as_deref(),
            Some("opacity 500ms ease, transform 500ms ease")
        );
    }
}
