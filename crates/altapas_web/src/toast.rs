//! Toast rendering and timers.

use crate::dom::{js_error, set_style, BindError};
use altapas_core::{Toast, ToastPhase, ToastTimeline};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Inline style for a freshly attached, still off-screen toast.
fn toast_css(timeline: &ToastTimeline) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; \
         background: var(--gradient-card); color: var(--color-text-primary); \
         padding: 1rem 1.5rem; border-radius: var(--radius-md); \
         box-shadow: var(--shadow-lg); z-index: 10000; \
         transform: {}; transition: transform {}ms ease;",
        ToastPhase::Pending.transform(),
        timeline.exit_duration_ms()
    )
}

/// Runs `callback` once after `delay_ms`.
pub(crate) fn schedule(
    window: &Window,
    delay_ms: u32,
    callback: impl FnOnce() + 'static,
) -> Result<(), BindError> {
    let closure: Closure<dyn FnMut()> = Closure::once(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Attaches `toast` to the body and schedules its slide-in, slide-out and removal.
pub fn show_toast(
    window: &Window,
    document: &Document,
    toast: &Toast,
    timeline: ToastTimeline,
) -> Result<(), BindError> {
    let body = document.body().ok_or(BindError::NoBody)?;
    let node = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::Js("created div is not an HtmlElement".to_string()))?;
    node.set_class_name(&toast.class_name());
    node.set_text_content(Some(&toast.message));
    node.style().set_css_text(&toast_css(&timeline));
    body.append_child(&node).map_err(js_error)?;

    let entering = node.clone();
    schedule(window, timeline.enter_at_ms, move || {
        set_style(&entering, "transform", ToastPhase::Visible.transform());
    })?;
    let leaving = node.clone();
    schedule(window, timeline.leave_at_ms, move || {
        set_style(&leaving, "transform", ToastPhase::Leaving.transform());
    })?;
    schedule(window, timeline.remove_at_ms, move || {
        node.remove();
    })?;

    debug!(
        "event=toast_shown module=web status=ok kind={}",
        toast.kind.as_str()
    );
    Ok(())
}
