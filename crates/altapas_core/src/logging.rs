//! Logging bootstrap and diagnostic policy.
//!
//! # Responsibility
//! - Normalize log levels shared by every host (native files, browser console).
//! - Initialize rolling file logs once per native process.
//! - Route panics into the log as one sanitized `event=panic_captured` line.
//!
//! # Invariants
//! - Log lines are metadata-only: `event=<name> module=<module> status=<status> ...`.
//!   Visitor-entered text (contact form content, toast messages) is never logged.
//! - Native init is idempotent for the same level and directory and rejects
//!   reconfiguration.
//! - Nothing in this module panics.

use log::{error, LevelFilter};
use once_cell::sync::OnceCell;

const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Parses a case-insensitive level name into a `log` filter.
pub fn level_filter(level: &str) -> Result<LevelFilter, String> {
    let filter = match normalize_level(level)? {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };
    Ok(filter)
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Installs a panic hook that logs a sanitized panic summary, then chains to
/// the previously installed hook. Repeated calls are no-ops.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// Flattens newlines and caps `value` at `max_chars`, appending `...` when cut.
pub fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::file::{init_logging, logging_status};

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::{install_panic_hook, normalize_level};
    use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
    use log::info;
    use once_cell::sync::OnceCell;
    use std::path::{Path, PathBuf};

    const LOG_FILE_BASENAME: &str = "altapas";
    const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
    const MAX_LOG_FILES: usize = 3;

    static FILE_LOGGING: OnceCell<FileLogging> = OnceCell::new();

    struct FileLogging {
        level: &'static str,
        log_dir: PathBuf,
        _handle: LoggerHandle,
    }

    impl FileLogging {
        fn conflict(&self, level: &'static str, log_dir: &Path) -> Option<String> {
            if self.log_dir != log_dir {
                return Some(format!(
                    "logging already initialized at `{}`; refusing to switch to `{}`",
                    self.log_dir.display(),
                    log_dir.display()
                ));
            }
            if self.level != level {
                return Some(format!(
                    "logging already initialized with level `{}`; refusing to switch to `{}`",
                    self.level, level
                ));
            }
            None
        }
    }

    /// Initializes rolling file logs for native hosts.
    ///
    /// # Invariants
    /// - Same `level` + `log_dir` again is a no-op returning `Ok(())`.
    /// - A different level or directory after the first success is rejected.
    ///
    /// # Errors
    /// - `level` is not one of `trace|debug|info|warn|error`.
    /// - `log_dir` is empty, relative, or cannot be created.
    /// - The logger backend fails to start (e.g. another global logger exists).
    pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
        let level = normalize_level(level)?;
        let log_dir = absolute_log_dir(log_dir)?;

        let state = FILE_LOGGING.get_or_try_init(|| start_file_logger(level, &log_dir))?;
        match state.conflict(level, &log_dir) {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    /// Returns `(level, log_dir)` once file logging is active.
    pub fn logging_status() -> Option<(&'static str, PathBuf)> {
        FILE_LOGGING
            .get()
            .map(|state| (state.level, state.log_dir.clone()))
    }

    fn start_file_logger(level: &'static str, log_dir: &Path) -> Result<FileLogging, String> {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                log_dir.display()
            )
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        install_panic_hook();
        info!(
            "event=logging_init module=core status=ok host=native level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(FileLogging {
            level,
            log_dir: log_dir.to_path_buf(),
            _handle: handle,
        })
    }

    fn absolute_log_dir(raw: &str) -> Result<PathBuf, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
        }
        Ok(path.to_path_buf())
    }

    #[cfg(test)]
    mod tests {
        use super::{absolute_log_dir, init_logging, logging_status};

        #[test]
        fn rejects_relative_log_dir() {
            let error = absolute_log_dir("logs/dev").expect_err("relative paths must be rejected");
            assert!(error.contains("absolute"));
        }

        #[test]
        fn init_is_idempotent_and_rejects_conflicts() {
            let first = tempfile::tempdir().expect("create temp dir");
            let second = tempfile::tempdir().expect("create temp dir");
            let first_dir = first.path().to_str().expect("utf-8 temp dir").to_string();
            let second_dir = second.path().to_str().expect("utf-8 temp dir").to_string();

            init_logging("info", &first_dir).expect("first init should succeed");
            init_logging("INFO", &first_dir).expect("same config should be idempotent");

            let level_error =
                init_logging("debug", &first_dir).expect_err("level conflict should fail");
            assert!(level_error.contains("refusing to switch"));
            let dir_error =
                init_logging("info", &second_dir).expect_err("directory conflict should fail");
            assert!(dir_error.contains("refusing to switch"));

            let (level, dir) = logging_status().expect("logging should be active");
            assert_eq!(level, "info");
            assert_eq!(dir, first.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{level_filter, normalize_level, sanitize_message};
    use log::LevelFilter;

    #[test]
    fn normalize_level_accepts_aliases() {
        assert_eq!(normalize_level(" Warning ").expect("warning alias"), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn level_filter_maps_names() {
        assert_eq!(level_filter("TRACE").expect("trace"), LevelFilter::Trace);
        assert_eq!(level_filter("error").expect("error"), LevelFilter::Error);
    }

    #[test]
    fn sanitize_message_flattens_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert_eq!(sanitized, "line1 li...");
        assert_eq!(sanitize_message("short", 8), "short");
    }
}
