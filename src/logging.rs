//! Process-wide logging bootstrap.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Re-initialization with a different level is rejected.
//! - Output goes to stderr so stdout stays free for command output.
//!
//! Messages use `event=<name> module=<area> key=value` pairs.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Errors returned by [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggingError {
    /// The requested level is not one of the supported names.
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    /// Logging is already running at another level.
    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        /// Level in effect.
        active: &'static str,
        /// Level that was requested.
        requested: &'static str,
    },

    /// The logger backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(String),
}

/// Starts logging to stderr at `level`.
///
/// # Errors
///
/// Returns [`LoggingError`] when the level is unsupported, differs from the
/// level already in effect, or the backend cannot start.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let requested = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_str(requested)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        info!(
            "event=logging_init module=logging status=ok level={requested} version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(LoggingState {
            level: requested,
            _logger: logger,
        })
    })?;

    if state.level == requested {
        Ok(())
    } else {
        Err(LoggingError::AlreadyInitialized {
            active: state.level,
            requested,
        })
    }
}

/// Returns the active level, or `None` before [`init_logging`] succeeds.
#[must_use]
pub fn logging_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Returns the default level for the current build mode.
#[must_use]
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_owned())),
    }
}
