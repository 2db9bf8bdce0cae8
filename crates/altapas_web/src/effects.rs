//! Peripheral page effects: lazy images, reveal-on-scroll, hover transforms,
//! global error reporting, load timing and service worker registration.
//!
//! None of these touch navigation state. Each one is skipped with an `info`
//! log when the browser lacks the API it needs.

use crate::app::listen;
use crate::dom::{describe, js_error, query_all, set_style, BindError};
use altapas_core::chrome::effects::{
    lazy_image_source, HoverEffect, LAZY_IMAGE_CLASS, LAZY_IMAGE_SELECTOR, REVEAL_CLASS,
    REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};
use altapas_core::sanitize_message;
use js_sys::{Array, Reflect};
use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, ErrorEvent, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

const SERVICE_WORKER_URL: &str = "/sw.js";
const MAX_ERROR_MESSAGE_CHARS: usize = 200;

fn supports(target: &JsValue, api: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(api)).unwrap_or(false)
}

fn intersecting_targets(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
        .map(|entry| entry.target())
        .collect()
}

/// Swaps `data-src` into lazy images as they scroll into view.
pub fn setup_lazy_images(window: &Window, document: &Document) -> Result<(), BindError> {
    if !supports(window, "IntersectionObserver") {
        info!("event=lazy_images module=web status=skipped reason=no_intersection_observer");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    let data_src = image.get_attribute("data-src");
                    let current = image.src();
                    let next = lazy_image_source(data_src.as_deref(), &current).to_string();
                    image.set_src(&next);
                    let _ = image.class_list().remove_1(LAZY_IMAGE_CLASS);
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer =
        IntersectionObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
    callback.forget();

    let images = query_all::<Element>(document, LAZY_IMAGE_SELECTOR)?;
    for image in &images {
        observer.observe(image);
    }
    info!(
        "event=lazy_images module=web status=ok observed={}",
        images.len()
    );
    Ok(())
}

/// Adds the reveal class to cards and menu sections once they are visible.
pub fn setup_reveal_on_scroll(window: &Window, document: &Document) -> Result<(), BindError> {
    if !supports(window, "IntersectionObserver") {
        info!("event=reveal_on_scroll module=web status=skipped reason=no_intersection_observer");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array)>::new(|entries: Array| {
        for target in intersecting_targets(&entries) {
            let _ = target.class_list().add_1(REVEAL_CLASS);
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    callback.forget();

    for element in query_all::<Element>(document, REVEAL_SELECTOR)? {
        observer.observe(&element);
    }
    Ok(())
}

/// Applies hover transforms to dish rows and cards.
pub fn setup_hover_effects(document: &Document) -> Result<(), BindError> {
    for effect in HoverEffect::ALL {
        for element in query_all::<HtmlElement>(document, effect.selector())? {
            let entered = element.clone();
            listen(&element, "mouseenter", move |_: Event| {
                set_style(&entered, "transform", effect.enter_transform());
            })?;
            let left = element.clone();
            listen(&element, "mouseleave", move |_: Event| {
                set_style(&left, "transform", effect.leave_transform());
            })?;
        }
    }
    Ok(())
}

/// Logs uncaught script errors. Nothing is retried or shown to visitors.
pub fn setup_error_reporting(window: &Window) -> Result<(), BindError> {
    listen(window, "error", |event: Event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_else(|| event.type_());
        error!(
            "event=uncaught_error module=web status=error message={}",
            sanitize_message(&message, MAX_ERROR_MESSAGE_CHARS)
        );
    })
}

/// Logs the time from navigation start to the `load` event.
pub fn setup_load_timing(window: &Window) -> Result<(), BindError> {
    let timed = window.clone();
    listen(window, "load", move |_: Event| {
        if let Some(performance) = timed.performance() {
            info!(
                "event=page_loaded module=web status=ok elapsed_ms={:.0}",
                performance.now()
            );
        }
    })
}

/// Registers the offline service worker after `load`, when supported.
pub fn register_service_worker(window: &Window) -> Result<(), BindError> {
    let navigator = window.navigator();
    if !supports(&navigator, "serviceWorker") {
        info!("event=service_worker module=web status=skipped reason=unsupported");
        return Ok(());
    }

    listen(window, "load", move |_: Event| {
        let on_registered = Closure::<dyn FnMut(JsValue)>::new(|_: JsValue| {
            info!("event=service_worker module=web status=ok url={SERVICE_WORKER_URL}");
        });
        let on_failed = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
            warn!(
                "event=service_worker module=web status=error error={}",
                describe(&err)
            );
        });
        let _ = navigator
            .service_worker()
            .register(SERVICE_WORKER_URL)
            .then2(&on_registered, &on_failed);
        on_registered.forget();
        on_failed.forget();
    })
}
