//! Event wiring between the DOM and the core controller.
//!
//! # Responsibility
//! - Build the single `SiteApp` for the page and attach every listener.
//! - Translate DOM events into core intents and apply chrome changes.
//!
//! # Invariants
//! - One `SiteApp` per page, shared by listeners through `Rc<RefCell<_>>`.
//! - A listener never holds the `RefCell` borrow while dispatching another
//!   DOM event (e.g. the synthetic click fired for keyboard activation).
//! - Only in-page links suppress the browser default; other hrefs navigate.

use crate::dom::{
    js_error, optional_by_id, query_all, set_style, BindError, DomPage, CTA_SELECTOR,
    FOOTER_LINK_SELECTOR, NAVBAR_ID, NAV_MENU_ID, NAV_TOGGLE_ID,
};
use altapas_core::chrome::announce::ANNOUNCER_CLASS;
use altapas_core::chrome::focus::{is_activation_key, KEYBOARD_NAVIGATION_CLASS};
use altapas_core::chrome::menu::MENU_OPEN_CLASS;
use altapas_core::{
    FocusMode, MenuChange, MobileMenu, NavbarScroll, NavigationIntent, SectionNavigator,
    SiteConfig,
};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node, Window};

type SharedApp = Rc<RefCell<SiteApp>>;

/// Attaches `handler` for `event` on `target` for the page lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BindError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn suppress_default(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

/// Optional navbar/menu elements the chrome reducers act on.
struct Chrome {
    body: HtmlElement,
    navbar: Option<HtmlElement>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
}

impl Chrome {
    fn bind(document: &Document, body: HtmlElement) -> Self {
        Self {
            body,
            navbar: optional_by_id(document, NAVBAR_ID),
            nav_toggle: optional_by_id(document, NAV_TOGGLE_ID),
            nav_menu: optional_by_id(document, NAV_MENU_ID),
        }
    }

    fn apply_menu(&self, change: MenuChange) {
        if change == MenuChange::Unchanged {
            return;
        }
        let open = change == MenuChange::Opened;
        for element in [&self.nav_menu, &self.nav_toggle].into_iter().flatten() {
            let _ = element.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        }
        let overflow = if change.locks_body_scroll() {
            "hidden"
        } else {
            ""
        };
        set_style(&self.body, "overflow", overflow);
        debug!("event=mobile_menu module=web status=ok open={open}");
    }

    fn apply_keyboard_mode(&self, keyboard: bool) {
        let _ = self
            .body
            .class_list()
            .toggle_with_force(KEYBOARD_NAVIGATION_CLASS, keyboard);
    }
}

/// Everything the page listeners share.
struct SiteApp {
    navigator: SectionNavigator<DomPage>,
    chrome: Chrome,
    menu: MobileMenu,
    navbar_scroll: NavbarScroll,
    focus: FocusMode,
}

impl SiteApp {
    /// Dispatches `intent`; returns `true` when it navigated.
    fn navigate(&mut self, intent: &NavigationIntent) -> bool {
        if self.navigator.handle_intent(intent).is_none() {
            return false;
        }
        if intent.closes_mobile_menu() {
            let change = self.menu.close();
            self.chrome.apply_menu(change);
        }
        true
    }
}

fn create_announcer(document: &Document, body: &HtmlElement) -> Result<Element, BindError> {
    let announcer = document.create_element("div").map_err(js_error)?;
    announcer
        .set_attribute("aria-live", "polite")
        .map_err(js_error)?;
    announcer
        .set_attribute("aria-atomic", "true")
        .map_err(js_error)?;
    announcer.set_class_name(ANNOUNCER_CLASS);
    body.append_child(&announcer).map_err(js_error)?;
    Ok(announcer)
}

/// Binds the page, wires every listener and shows the initial section.
pub fn start_site(
    window: &Window,
    document: &Document,
    config: SiteConfig,
) -> Result<(), BindError> {
    let body = document.body().ok_or(BindError::NoBody)?;
    let announcer = create_announcer(document, &body)?;
    let page = DomPage::bind(window.clone(), document.clone(), Some(announcer))?;
    let app = Rc::new(RefCell::new(SiteApp {
        menu: MobileMenu::new(config.desktop_breakpoint_px),
        navbar_scroll: NavbarScroll::new(config.navbar_hide_threshold_px),
        focus: FocusMode::default(),
        chrome: Chrome::bind(document, body),
        navigator: SectionNavigator::new(page, config),
    }));

    wire_menu_toggle(&app)?;
    wire_nav_links(&app)?;
    wire_footer_links(&app, document)?;
    wire_call_to_action(&app, document)?;
    wire_document(&app, document)?;
    wire_window(&app, window)?;

    app.borrow_mut().navigate(&NavigationIntent::InitialLoad);
    info!("event=site_start module=web status=ok");
    Ok(())
}

fn wire_menu_toggle(app: &SharedApp) -> Result<(), BindError> {
    let Some(toggle) = app.borrow().chrome.nav_toggle.clone() else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&toggle, "click", move |event: Event| {
        suppress_default(&event);
        let mut app = app.borrow_mut();
        let change = app.menu.toggle();
        app.chrome.apply_menu(change);
    })
}

fn wire_nav_links(app: &SharedApp) -> Result<(), BindError> {
    let links = app.borrow().navigator.page().links().to_vec();
    for link in links {
        let clicked = link.clone();
        let shared = Rc::clone(app);
        listen(&link, "click", move |event: Event| {
            let Some(href) = clicked.get_attribute("href") else {
                return;
            };
            if shared.borrow_mut().navigate(&NavigationIntent::NavLink { href }) {
                suppress_default(&event);
            }
        })?;

        let activated = link.clone();
        listen(&link, "keydown", move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_activation_key(&key_event.key()) {
                event.prevent_default();
                activated.click();
            }
        })?;
    }
    Ok(())
}

fn wire_footer_links(app: &SharedApp, document: &Document) -> Result<(), BindError> {
    for link in query_all::<Element>(document, FOOTER_LINK_SELECTOR)? {
        let clicked = link.clone();
        let shared = Rc::clone(app);
        listen(&link, "click", move |event: Event| {
            let Some(href) = clicked.get_attribute("href") else {
                return;
            };
            if shared
                .borrow_mut()
                .navigate(&NavigationIntent::FooterLink { href })
            {
                suppress_default(&event);
            }
        })?;
    }
    Ok(())
}

fn wire_call_to_action(app: &SharedApp, document: &Document) -> Result<(), BindError> {
    let Some(cta) = document.query_selector(CTA_SELECTOR).map_err(js_error)? else {
        info!("event=element_absent module=web status=skipped element={CTA_SELECTOR}");
        return Ok(());
    };
    let shared = Rc::clone(app);
    listen(&cta, "click", move |event: Event| {
        suppress_default(&event);
        shared
            .borrow_mut()
            .navigate(&NavigationIntent::CallToAction);
    })
}

fn wire_document(app: &SharedApp, document: &Document) -> Result<(), BindError> {
    let shared = Rc::clone(app);
    listen(document, "click", move |event: Event| {
        let mut app = shared.borrow_mut();
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let inside_navbar = app
            .chrome
            .navbar
            .as_ref()
            .is_some_and(|navbar| navbar.contains(target.as_ref()));
        let change = app.menu.on_document_click(inside_navbar);
        app.chrome.apply_menu(change);
    })?;

    let shared = Rc::clone(app);
    listen(document, "keydown", move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = key_event.key();
        let mut app = shared.borrow_mut();
        if key == "Escape" {
            let change = app.menu.on_escape();
            app.chrome.apply_menu(change);
        }
        if app.focus.on_key(&key) {
            app.chrome.apply_keyboard_mode(true);
        }
    })?;

    let shared = Rc::clone(app);
    listen(document, "mousedown", move |_: Event| {
        let mut app = shared.borrow_mut();
        if app.focus.on_mouse_down() {
            app.chrome.apply_keyboard_mode(false);
        }
    })
}

fn wire_window(app: &SharedApp, window: &Window) -> Result<(), BindError> {
    let shared = Rc::clone(app);
    listen(window, "popstate", move |_: Event| {
        shared.borrow_mut().navigate(&NavigationIntent::HistoryPop);
    })?;

    let shared = Rc::clone(app);
    let resized = window.clone();
    listen(window, "resize", move |_: Event| {
        let Some(width) = resized.inner_width().ok().and_then(|value| value.as_f64()) else {
            warn!("event=viewport_width module=web status=error");
            return;
        };
        let mut app = shared.borrow_mut();
        let change = app.menu.on_resize(width);
        app.chrome.apply_menu(change);
    })?;

    let shared = Rc::clone(app);
    let scrolled = window.clone();
    listen(window, "scroll", move |_: Event| {
        let offset = scrolled.scroll_y().unwrap_or(0.0);
        let mut app = shared.borrow_mut();
        let position = app.navbar_scroll.on_scroll(offset);
        if let Some(navbar) = &app.chrome.navbar {
            set_style(navbar, "transform", position.transform());
        }
    })
}
