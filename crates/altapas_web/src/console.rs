//! Browser console logging backend.
//!
//! # Responsibility
//! - Route `log` records from core and binding code to `console.*`.
//!
//! # Invariants
//! - Installed at most once per page; re-init with the same level is a no-op.
//! - A different level after the first init is rejected.
//! - Installing the logger also installs the core panic hook.

use altapas_core::{install_panic_hook, level_filter};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fmt::Arguments;
use wasm_bindgen::JsValue;

static CONSOLE_LEVEL: OnceCell<LevelFilter> = OnceCell::new();
static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            record.level(),
            record.target(),
            record.args(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, args: &Arguments<'_>) -> String {
    format!("[altapas] {level} {target}: {args}")
}

/// Installs the console logger at `level`.
///
/// Returns an error when `level` is unsupported, another logger is already
/// installed, or the console logger is active at a different level.
pub fn init_console_logging(level: &str) -> Result<(), String> {
    let requested = level_filter(level)?;
    let active = CONSOLE_LEVEL.get_or_try_init(|| -> Result<LevelFilter, String> {
        log::set_logger(&CONSOLE_LOGGER)
            .map_err(|err| format!("failed to install console logger: {err}"))?;
        log::set_max_level(requested);
        install_panic_hook();
        log::info!(
            "event=logging_init module=web status=ok host=browser level={requested} version={}",
            altapas_core::core_version()
        );
        Ok(requested)
    })?;

    if *active != requested {
        return Err(format!(
            "console logging already initialized with level `{active}`; refusing to switch to `{requested}`"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::format_line;
    use log::Level;

    #[test]
    fn format_line_prefixes_level_and_target() {
        let line = format_line(
            Level::Warn,
            "altapas_core::nav::controller",
            &format_args!("event=section_missing section={:?}", "x"),
        );
        assert_eq!(
            line,
            "[altapas] WARN altapas_core::nav::controller: event=section_missing section=\"x\""
        );
    }
}
