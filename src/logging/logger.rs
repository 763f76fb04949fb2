//! Structured logger used by the command layer.
use std::path::{Path, PathBuf};

use super::utils::log_file_path;

/// Logger that forwards every message to [`tracing`].
///
/// Messages reach the console and the persistent log file at
/// `$XDG_CACHE_HOME/baller/<command>.log` through the subscriber installed
/// by [`init_subscriber`](super::subscriber::init_subscriber).  Without a
/// subscriber (e.g. in tests) messages are dropped.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Create a logger for `command`.
    ///
    /// Only records where the log file lives; the file itself is created by
    /// the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Path of the persistent log file for this command.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_file
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major step of a command).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "baller::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (console only with `--verbose`; always in the
    /// log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}
