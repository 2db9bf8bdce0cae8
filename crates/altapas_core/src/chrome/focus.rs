//! Keyboard focus indicators.

/// Body class enabling visible focus rings.
pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

/// Whether `key` activates a focused navigation link.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Tracks whether the visitor is navigating by keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    /// `Tab` switches to keyboard mode. Returns `true` when the mode changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key != "Tab" || self.keyboard {
            return false;
        }
        self.keyboard = true;
        true
    }

    /// Any mouse press leaves keyboard mode. Returns `true` when the mode changed.
    pub fn on_mouse_down(&mut self) -> bool {
        std::mem::replace(&mut self.keyboard, false)
    }
}
