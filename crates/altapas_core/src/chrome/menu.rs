//! Mobile navigation menu state.

/// Class toggled on the menu and its toggle button while open.
pub const MENU_OPEN_CLASS: &str = "active";

/// Whether a menu event changed the open state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    Closed,
    Unchanged,
}

impl MenuChange {
    /// Whether body scrolling must be locked after this change.
    pub fn locks_body_scroll(self) -> bool {
        self == Self::Opened
    }
}

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
    desktop_breakpoint_px: u32,
}

impl MobileMenu {
    pub fn new(desktop_breakpoint_px: u32) -> Self {
        Self {
            open: false,
            desktop_breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuChange {
        self.open = !self.open;
        if self.open {
            MenuChange::Opened
        } else {
            MenuChange::Closed
        }
    }

    pub fn close(&mut self) -> MenuChange {
        if !self.open {
            return MenuChange::Unchanged;
        }
        self.open = false;
        MenuChange::Closed
    }

    pub fn on_escape(&mut self) -> MenuChange {
        self.close()
    }

    /// Clicks inside the navbar never close the menu.
    pub fn on_document_click(&mut self, inside_navbar: bool) -> MenuChange {
        if inside_navbar {
            return MenuChange::Unchanged;
        }
        self.close()
    }

    /// Viewports wider than the desktop breakpoint close the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> MenuChange {
        if viewport_width > f64::from(self.desktop_breakpoint_px) {
            self.close()
        } else {
            MenuChange::Unchanged
        }
    }
}
