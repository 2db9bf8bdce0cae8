//! Navbar visibility driven by scroll direction.

/// Navbar position requested after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarPosition {
    Shown,
    Hidden,
}

impl NavbarPosition {
    /// CSS `transform` for the navbar.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the navbar while scrolling down past a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarScroll {
    last_offset: f64,
    hide_threshold_px: f64,
}

impl NavbarScroll {
    pub fn new(hide_threshold_px: u32) -> Self {
        Self {
            last_offset: 0.0,
            hide_threshold_px: f64::from(hide_threshold_px),
        }
    }

    /// Records the new vertical offset and returns where the navbar belongs.
    ///
    /// Negative offsets (overscroll bounce) are remembered as zero.
    pub fn on_scroll(&mut self, offset: f64) -> NavbarPosition {
        let position = if offset > self.last_offset && offset > self.hide_threshold_px {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_offset = offset.max(0.0);
        position
    }
}
