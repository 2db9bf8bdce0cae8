//! Address-bar fragment parsing.

use crate::model::section::SectionId;

/// Extracts the target section from a link `href`.
///
/// Only in-page links (`#...`) navigate; anything else returns `None` so the
/// host lets the browser follow it. A bare `#` yields an empty id, which the
/// controller treats like any other unknown section.
pub fn section_from_href(href: &str) -> Option<SectionId> {
    href.strip_prefix('#').map(SectionId::new)
}

/// Resolves the section named by the current address-bar fragment.
///
/// An empty fragment or a bare `#` resolves to `home`.
pub fn section_from_fragment(fragment: &str, home: &SectionId) -> SectionId {
    match fragment.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => SectionId::new(rest),
        _ => home.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{section_from_fragment, section_from_href};
    use crate::model::section::SectionId;

    #[test]
    fn href_requires_hash_prefix() {
        assert_eq!(section_from_href("#menu"), Some(SectionId::new("menu")));
        assert_eq!(section_from_href("#"), Some(SectionId::new("")));
        assert_eq!(section_from_href("/reservations"), None);
        assert_eq!(section_from_href("https://example.com/#menu"), None);
    }

    #[test]
    fn fragment_defaults_to_home() {
        let home = SectionId::home();
        assert_eq!(section_from_fragment("", &home), home);
        assert_eq!(section_from_fragment("#", &home), home);
        assert_eq!(
            section_from_fragment("#contact", &home),
            SectionId::new("contact")
        );
    }
}
