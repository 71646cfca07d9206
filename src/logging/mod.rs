//! Application logging functionality
//!
//! Diagnostics go through `tracing`: a compact layer on stderr filtered by
//! `FONTSLIM_LOG` or `-v`, and, once the config directory exists, a
//! debug-level layer appended to a dated log file under it. User-facing
//! progress is plain stdout and
//! does not pass through here.

use crate::core::config::ConfigFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "FONTSLIM_LOG";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    format!("fontslim-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Logs directory to use, or `None` when `config_dir` has not been set up.
///
/// The directory tree is only created by `--new-config`; a plain batch run
/// never creates `~/.config/fontslim` on its own.
pub fn configured_logs_dir(config_dir: &Path) -> Option<PathBuf> {
    if !config_dir.is_dir() {
        return None;
    }
    let logs_dir = config_dir.join("logs");
    fs::create_dir_all(&logs_dir).ok()?;
    Some(logs_dir)
}

/// Build the stderr filter: the environment wins over the CLI default
fn stderr_filter(default_directive: &str) -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => {
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(default_directive))
        }
        _ => EnvFilter::new(default_directive),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped, so the caller
/// keeps it alive until the batch is done. File logging is best-effort: if
/// the config directory does not exist yet, or the logs directory cannot be
/// created, only stderr logging is installed.
pub fn init_logging(default_directive: &str) -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(stderr_filter(default_directive));

    let (file_layer, guard) = match configured_logs_dir(&ConfigFile::config_dir()) {
        Some(logs_dir) => {
            let appender = tracing_appender::rolling::never(logs_dir, current_log_file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("fontslim=debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };
    let file_logging = file_layer.is_some();

    // A subscriber may already be installed (tests); keep the existing one.
    let installed = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed && file_logging {
        tracing::debug!(
            "fontslim started at {}, logging to {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            current_log_file().display()
        );
    } else if installed {
        tracing::debug!(
            "No config directory at {}, file logging disabled (run --new-config)",
            ConfigFile::config_dir().display()
        );
    }

    guard
}
