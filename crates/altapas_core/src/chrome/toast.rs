//! Notification toasts.
//!
//! # Responsibility
//! - Name toast kinds and their CSS classes.
//! - Define the slide-in / slide-out timeline hosts schedule timers from.
//!
//! # Invariants
//! - Unknown kind strings fall back to `info`.
//! - Phases advance monotonically with elapsed time:
//!   `Pending -> Visible -> Leaving -> Removed`.

use crate::config::SiteConfig;

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Lenient parse used at host boundaries.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One toast to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// e.g. `notification notification--success`.
    pub fn class_name(&self) -> String {
        format!("notification notification--{}", self.kind.as_str())
    }
}

/// Lifecycle phase of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached but still off-screen.
    Pending,
    Visible,
    /// Sliding back off-screen.
    Leaving,
    /// Detached from the page.
    Removed,
}

impl ToastPhase {
    /// CSS `transform` for this phase.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateX(0)",
            Self::Pending | Self::Leaving | Self::Removed => "translateX(100%)",
        }
    }
}

/// Timer offsets, all measured from toast creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter_at_ms: u32,
    pub leave_at_ms: u32,
    pub remove_at_ms: u32,
}

impl ToastTimeline {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            enter_at_ms: config.toast_enter_delay_ms,
            leave_at_ms: config.toast_visible_ms,
            remove_at_ms: config.toast_visible_ms.saturating_add(config.toast_exit_ms),
        }
    }

    /// Slide-out duration, used for the CSS transition.
    pub fn exit_duration_ms(&self) -> u32 {
        self.remove_at_ms - self.leave_at_ms
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> ToastPhase {
        if elapsed_ms < self.enter_at_ms {
            ToastPhase::Pending
        } else if elapsed_ms < self.leave_at_ms {
            ToastPhase::Visible
        } else if elapsed_ms < self.remove_at_ms {
            ToastPhase::Leaving
        } else {
            ToastPhase::Removed
        }
    }
}
