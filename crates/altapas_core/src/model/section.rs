//! Section identifiers.
//!
//! # Responsibility
//! - Name one page section and its address-bar fragment form.
//!
//! # Invariants
//! - `SectionId` is an opaque key; unknown ids are representable so the
//!   controller can degrade instead of rejecting them.
//! - `fragment()` is always `#` followed by the raw id.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Landing section shown when the address bar carries no fragment.
pub const HOME_SECTION_ID: &str = "home";
/// Dishes and drinks section; default call-to-action target.
pub const MENU_SECTION_ID: &str = "menu";
/// Story/about section.
pub const ABOUT_SECTION_ID: &str = "about";
/// Location and reservations section.
pub const CONTACT_SECTION_ID: &str = "contact";

/// Identifier of one page section (matches the section element `id`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The landing section id.
    pub fn home() -> Self {
        Self::new(HOME_SECTION_ID)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Address-bar fragment for this section, e.g. `#menu`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionId, HOME_SECTION_ID};

    #[test]
    fn fragment_prefixes_hash() {
        assert_eq!(SectionId::new("about").fragment(), "#about");
        assert_eq!(SectionId::home().as_str(), HOME_SECTION_ID);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&SectionId::new("menu")).expect("serialize id");
        assert_eq!(json, "\"menu\"");
    }
}
