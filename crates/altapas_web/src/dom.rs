//! DOM binding for the navigation controller.
//!
//! # Responsibility
//! - Locate the page elements named by the markup contract.
//! - Implement `PageSurface` on top of live DOM nodes.
//!
//! # Invariants
//! - Sections and navigation links are read once at bind time.
//! - Only `.section` elements are required; every other element is optional.
//! - DOM write failures are logged and never abort a navigation.

use altapas_core::{PageSurface, SectionId, Transition};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const FOOTER_LINK_SELECTOR: &str = ".footer__nav a";
pub const CTA_SELECTOR: &str = ".hero__cta";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Errors raised while binding the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    NoWindow,
    NoDocument,
    NoBody,
    NoSections,
    AlreadyStarted,
    Js(String),
}

impl Display for BindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::NoBody => write!(f, "document has no body"),
            Self::NoSections => write!(f, "page has no `{SECTION_SELECTOR}` elements with ids"),
            Self::AlreadyStarted => write!(f, "site runtime already started"),
            Self::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl Error for BindError {}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn js_error(value: JsValue) -> BindError {
    BindError::Js(describe(&value))
}

/// All elements matching `selector` that cast to `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BindError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Element by id, logging when the optional element is absent.
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok());
    if element.is_none() {
        info!("event=element_absent module=web status=skipped element=#{id}");
    }
    element
}

/// Sets one inline style property, logging failures.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(
            "event=style_write module=web status=error property={property} error={}",
            describe(&err)
        );
    }
}

struct DomSection {
    id: SectionId,
    element: HtmlElement,
}

/// Live page implementing `PageSurface`.
pub struct DomPage {
    window: Window,
    document: Document,
    sections: Vec<DomSection>,
    links: Vec<HtmlElement>,
    announcer: Option<Element>,
}

impl DomPage {
    /// Reads sections and navigation links from `document`.
    ///
    /// # Errors
    /// - `BindError::NoSections` when no `.section` element carries an id.
    pub fn bind(
        window: Window,
        document: Document,
        announcer: Option<Element>,
    ) -> Result<Self, BindError> {
        let sections = query_all::<HtmlElement>(&document, SECTION_SELECTOR)?
            .into_iter()
            .filter_map(|element| {
                let id = element.id();
                if id.is_empty() {
                    warn!("event=section_without_id module=web status=skipped");
                    return None;
                }
                Some(DomSection {
                    id: SectionId::new(id),
                    element,
                })
            })
            .collect::<Vec<_>>();
        if sections.is_empty() {
            return Err(BindError::NoSections);
        }

        let links = query_all::<HtmlElement>(&document, NAV_LINK_SELECTOR)?;
        info!(
            "event=page_bound module=web status=ok sections={} nav_links={}",
            sections.len(),
            links.len()
        );

        Ok(Self {
            window,
            document,
            sections,
            links,
            announcer,
        })
    }

    /// Primary navigation links, in document order.
    pub fn links(&self) -> &[HtmlElement] {
        &self.links
    }

    fn section(&self, id: &SectionId) -> Option<&HtmlElement> {
        self.sections
            .iter()
            .find(|section| &section.id == id)
            .map(|section| &section.element)
    }
}

impl PageSurface for DomPage {
    fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }

    fn hide_section(&mut self, id: &SectionId) {
        if let Some(element) = self.section(id) {
            set_style(element, "display", "none");
        }
    }

    fn reveal_section(&mut self, id: &SectionId, transition: &Transition) {
        let Some(element) = self.section(id) else {
            return;
        };
        set_style(element, "display", "block");
        set_style(element, "opacity", "0");
        set_style(element, "transform", &transition.initial_transform());
        // Reading layout flushes the start state so the transition runs.
        let _ = element.offset_height();
        set_style(element, "transition", &transition.css());
        set_style(element, "opacity", "1");
        set_style(element, "transform", transition.final_transform());
    }

    fn link_hrefs(&self) -> Vec<String> {
        self.links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }

    fn set_link_active(&mut self, index: usize, active: bool) {
        let Some(link) = self.links.get(index) else {
            return;
        };
        if let Err(err) = link
            .class_list()
            .toggle_with_force(ACTIVE_LINK_CLASS, active)
        {
            warn!(
                "event=link_class_write module=web status=error error={}",
                describe(&err)
            );
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn push_fragment(&mut self, fragment: &str) {
        let pushed = self.window.history().and_then(|history| {
            history.push_state_with_url(&JsValue::NULL, "", Some(fragment))
        });
        if let Err(err) = pushed {
            warn!(
                "event=history_push module=web status=error error={}",
                describe(&err)
            );
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn announce(&mut self, message: &str) {
        if let Some(announcer) = &self.announcer {
            announcer.set_text_content(Some(message));
        }
    }
}
