//! Screen-reader announcer text.

use crate::model::section::SectionId;

/// Class of the visually hidden live region.
pub const ANNOUNCER_CLASS: &str = "sr-only";

/// Polite announcement emitted after a section becomes visible.
pub fn announcement_for(id: &SectionId) -> String {
    format!("Navigated to {id} section")
}

#[cfg(test)]
mod tests {
    use super::announcement_for;
    use crate::model::section::SectionId;

    #[test]
    fn names_the_section() {
        assert_eq!(
            announcement_for(&SectionId::new("menu")),
            "Navigated to menu section"
        );
    }
}
