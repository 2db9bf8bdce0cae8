//! Core page logic for the Al Tapas site.
//! This crate is the single source of truth for navigation invariants and
//! stays free of any browser dependency.

pub mod chrome;
pub mod config;
pub mod logging;
pub mod model;
pub mod nav;
pub mod page;

#[cfg(not(target_arch = "wasm32"))]
pub use logging::{init_logging, logging_status};
pub use logging::{default_log_level, install_panic_hook, level_filter, sanitize_message};

pub use chrome::contact::ContactSubmission;
pub use chrome::focus::FocusMode;
pub use chrome::menu::{MenuChange, MobileMenu};
pub use chrome::scroll::{NavbarPosition, NavbarScroll};
pub use chrome::toast::{Toast, ToastKind, ToastPhase, ToastTimeline};
pub use config::{ConfigError, SiteConfig};
pub use model::section::SectionId;
pub use nav::controller::{ActivationOutcome, SectionNavigator};
pub use nav::intent::{NavCommand, NavigateOptions, NavigationIntent};
pub use page::memory::MemoryPage;
pub use page::{PageSurface, Transition};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
