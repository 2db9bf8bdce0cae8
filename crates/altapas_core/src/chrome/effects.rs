//! Decorative hover and reveal-on-scroll effects, and lazy image sources.

/// Element group receiving a hover transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    /// Dish rows slide right.
    MenuItem,
    /// Highlight and testimonial cards lift.
    Card,
}

impl HoverEffect {
    pub const ALL: [Self; 2] = [Self::MenuItem, Self::Card];

    pub fn selector(self) -> &'static str {
        match self {
            Self::MenuItem => ".menu__item",
            Self::Card => ".highlight__card, .testimonial__card",
        }
    }

    pub fn enter_transform(self) -> &'static str {
        match self {
            Self::MenuItem => "translateX(10px)",
            Self::Card => "translateY(-8px) scale(1.02)",
        }
    }

    pub fn leave_transform(self) -> &'static str {
        match self {
            Self::MenuItem => "translateX(0)",
            Self::Card => "translateY(0) scale(1)",
        }
    }
}

/// Elements that animate in once scrolled into view.
pub const REVEAL_SELECTOR: &str = ".highlight__card, .testimonial__card, .menu__section";
/// Class added when an element first intersects the viewport.
pub const REVEAL_CLASS: &str = "animate-in";
/// Visible fraction that counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Images loaded only once they intersect the viewport.
pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
/// Placeholder class removed once the real source is set.
pub const LAZY_IMAGE_CLASS: &str = "lazy";

/// Source to load for a lazy image: `data-src` when set, else the current `src`.
pub fn lazy_image_source<'a>(data_src: Option<&'a str>, src: &'a str) -> &'a str {
    match data_src {
        Some(value) if !value.trim().is_empty() => value,
        _ => src,
    }
}
