//! Navigation intents and the commands they map to.

use crate::config::SiteConfig;
use crate::model::section::SectionId;
use crate::nav::fragment::section_from_href;

/// Side effects requested alongside a section activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Push `#<id>` onto the session history without reloading.
    pub update_history: bool,
    /// Smooth-scroll the viewport back to the top.
    pub scroll_to_top: bool,
}

/// Command handled by `SectionNavigator::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Show one section and mark its link.
    ActivateSection {
        id: SectionId,
        options: NavigateOptions,
    },
    /// Re-read the address-bar fragment and show what it names.
    ResolveInitial,
}

/// Something the visitor or the browser did that may change the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Primary navigation link activated.
    NavLink { href: String },
    /// Footer navigation link activated.
    FooterLink { href: String },
    /// Hero call-to-action activated.
    CallToAction,
    /// Browser back/forward.
    HistoryPop,
    /// Document finished loading.
    InitialLoad,
}

impl NavigationIntent {
    /// Maps this intent to a controller command.
    ///
    /// Returns `None` for links that do not point inside the page.
    pub fn to_command(&self, config: &SiteConfig) -> Option<NavCommand> {
        match self {
            Self::NavLink { href } => Some(NavCommand::ActivateSection {
                id: section_from_href(href)?,
                options: NavigateOptions {
                    update_history: true,
                    scroll_to_top: false,
                },
            }),
            Self::FooterLink { href } => Some(NavCommand::ActivateSection {
                id: section_from_href(href)?,
                options: NavigateOptions {
                    update_history: true,
                    scroll_to_top: true,
                },
            }),
            Self::CallToAction => Some(NavCommand::ActivateSection {
                id: config.cta_target.clone(),
                options: NavigateOptions {
                    update_history: true,
                    scroll_to_top: false,
                },
            }),
            Self::HistoryPop | Self::InitialLoad => Some(NavCommand::ResolveInitial),
        }
    }

    /// Whether handling this intent should also close the mobile menu.
    pub fn closes_mobile_menu(&self) -> bool {
        matches!(self, Self::NavLink { .. })
    }

    /// Stable name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NavLink { .. } => "nav_link",
            Self::FooterLink { .. } => "footer_link",
            Self::CallToAction => "call_to_action",
            Self::HistoryPop => "history_pop",
            Self::InitialLoad => "initial_load",
        }
    }
}
