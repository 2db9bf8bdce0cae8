//! Browser-facing API exported through wasm-bindgen.
//!
//! # Responsibility
//! - Expose page start-up and the small utility calls the markup invokes
//!   (toasts, smooth scroll, contact acknowledgement).
//! - Keep boundary error semantics simple: strings or `JsValue` errors.
//!
//! # Invariants
//! - Exported functions never panic across the wasm boundary.
//! - `start` binds the page at most once; later calls return an error.
//!   A start whose binding fails releases the claim so it can be retried.
//! - An invalid configuration override is logged and replaced by defaults.

use crate::app::start_site;
use crate::console::init_console_logging;
use crate::dom::BindError;
use crate::toast::show_toast;
use altapas_core::{
    core_version as core_version_inner, ping as ping_inner, ContactSubmission, SiteConfig,
    Toast, ToastKind, ToastTimeline,
};
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

static ACTIVE_CONFIG: OnceCell<SiteConfig> = OnceCell::new();
static START_GATE: StartGate = StartGate::new();

/// One-shot claim on page binding.
struct StartGate(AtomicBool);

impl StartGate {
    const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Runs `bind` unless a previous run succeeded or is in progress.
    /// A failed `bind` releases the claim.
    fn run_once<T>(&self, bind: impl FnOnce() -> Result<T, BindError>) -> Result<T, BindError> {
        if self.0.swap(true, Ordering::SeqCst) {
            return Err(BindError::AlreadyStarted);
        }
        let result = bind();
        if result.is_err() {
            self.0.store(false, Ordering::SeqCst);
        }
        result
    }
}

/// Minimal health-check export.
#[wasm_bindgen]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[wasm_bindgen]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Installs console logging at `level`.
///
/// Returns an empty string on success and the error message otherwise.
#[wasm_bindgen]
pub fn init_logging(level: String) -> String {
    match init_console_logging(level.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Starts the site runtime once the document is ready.
///
/// `config_json` is an optional JSON object overriding `SiteConfig` fields.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    let (config, config_error) = match parse_site_config(config_json.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    if let Err(err) = init_console_logging(&config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&err));
    }
    if let Some(err) = config_error {
        warn!("event=config_rejected module=web status=fallback error={err}");
    }

    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    START_GATE.run_once(|| start_site(&window, &document, config.clone()))?;
    let _ = ACTIVE_CONFIG.set(config);

    crate::effects::setup_error_reporting(&window)?;
    crate::effects::setup_lazy_images(&window, &document)?;
    crate::effects::setup_hover_effects(&document)?;
    crate::effects::setup_reveal_on_scroll(&window, &document)?;
    crate::effects::setup_load_timing(&window)?;
    crate::effects::register_service_worker(&window)?;
    info!("event=site_ready module=web status=ok");
    Ok(())
}

/// Shows a toast. `kind` is `info|success|warning|error` (default `info`).
///
/// Returns an empty string on success and the error message otherwise.
#[wasm_bindgen]
pub fn show_notification(message: String, kind: Option<String>) -> String {
    let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
    match render_toast(&Toast::new(message, kind)) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Smooth-scrolls the element with `element_id` to the top of the viewport.
///
/// Returns `false` when no such element exists.
#[wasm_bindgen]
pub fn scroll_to_element(element_id: String) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&element_id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Acknowledges a contact form submission locally with a success toast.
///
/// `form_json` is an object with optional `name`, `email`, `phone` and
/// `message` strings. Returns an empty string on success.
#[wasm_bindgen]
pub fn handle_contact_form(form_json: String) -> String {
    let submission = match parse_contact_form(&form_json) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("event=contact_form module=web status=rejected error={err}");
            return err;
        }
    };
    info!(
        "event=contact_form module=web status=ok {}",
        submission.log_summary()
    );
    match render_toast(&submission.acknowledgement()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

fn render_toast(toast: &Toast) -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    let config = ACTIVE_CONFIG.get().cloned().unwrap_or_default();
    let timeline = ToastTimeline::from_config(&config);
    show_toast(&window, &document, toast, timeline)
}

fn parse_site_config(config_json: Option<&str>) -> Result<SiteConfig, String> {
    let config = match config_json.map(str::trim) {
        None | Some("") => SiteConfig::default(),
        Some(raw) => serde_json::from_str::<SiteConfig>(raw)
            .map_err(|err| format!("invalid site config JSON: {err}"))?,
    };
    config
        .validate()
        .map_err(|err| format!("invalid site config: {err}"))?;
    Ok(config)
}

fn parse_contact_form(form_json: &str) -> Result<ContactSubmission, String> {
    serde_json::from_str::<ContactSubmission>(form_json)
        .map_err(|err| format!("invalid contact form JSON: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{core_version, parse_contact_form, parse_site_config, ping, StartGate};
    use crate::dom::BindError;
    use altapas_core::SectionId;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        let config = parse_site_config(None).expect("no override");
        assert_eq!(config.home_section, SectionId::home());
        parse_site_config(Some("   ")).expect("blank override");
    }

    #[test]
    fn config_override_is_validated() {
        let config = parse_site_config(Some(r#"{"cta_target":"contact"}"#))
            .expect("valid override should parse");
        assert_eq!(config.cta_target, SectionId::new("contact"));

        let err = parse_site_config(Some(r#"{"transition_ms":0}"#))
            .expect_err("zero duration must fail");
        assert!(err.contains("transition_ms"));

        let err = parse_site_config(Some("{not json")).expect_err("malformed JSON must fail");
        assert!(err.starts_with("invalid site config JSON"));
    }

    #[test]
    fn contact_form_accepts_partial_fields() {
        let submission =
            parse_contact_form(r#"{"name":"Rui","message":"Mesa para dois"}"#).expect("parse");
        assert_eq!(submission.name, "Rui");
        assert!(submission.email.is_empty());
        assert!(parse_contact_form("42").is_err());
    }

    #[test]
    fn failed_binding_allows_a_later_start() {
        let gate = StartGate::new();
        let err = gate
            .run_once(|| Err::<(), _>(BindError::NoSections))
            .expect_err("binding failure must surface");
        assert_eq!(err.to_string(), BindError::NoSections.to_string());

        gate.run_once(|| Ok(())).expect("retry after failure should bind");
        let err = gate
            .run_once(|| Ok(()))
            .expect_err("second successful start must be rejected");
        assert!(matches!(err, BindError::AlreadyStarted));
    }
}
