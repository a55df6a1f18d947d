//! Builder for creating Logger instances.

use std::path::PathBuf;

use crate::io::{ConsoleScreen, ScreenTarget};
use crate::logger::Logger;
use crate::target::Target;

/// Fluent builder for a [`Logger`].
///
/// Every option has the same default the plain constructor uses, so
/// `LoggerBuilder::default().build()` is equivalent to `Logger::new()`.
pub struct LoggerBuilder {
    identifier: String,
    timestamps: bool,
    target: Target,
    log_file: Option<PathBuf>,
    screen: Box<dyn ScreenTarget>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            identifier: String::new(),
            timestamps: true,
            target: Target::Screen,
            log_file: None,
            screen: Box::new(ConsoleScreen::new()),
        }
    }

    /// Set the identifier prefixed to every message.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Enable or disable timestamps.
    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Set the global logging target.
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Configure a log file path and enable the file target, keeping the
    /// screen flag as currently set.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self.target = Target::from_flags(self.target.includes_screen(), true);
        self
    }

    /// Replace the screen destination. Mainly useful for capturing output
    /// in tests.
    pub fn screen(mut self, screen: Box<dyn ScreenTarget>) -> Self {
        self.screen = screen;
        self
    }

    /// Build the logger. The log file, if configured, is not opened
    /// eagerly; the first file-directed write opens it.
    pub fn build(self) -> Logger {
        let mut logger = Logger::with_screen(self.screen);
        logger.set_identifier(self.identifier);
        logger.set_timestamps(self.timestamps);
        if let Some(path) = self.log_file {
            logger.set_log_file_path(path);
        }
        logger.set_target(self.target);
        logger
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("identifier", &self.identifier)
            .field("timestamps", &self.timestamps)
            .field("target", &self.target)
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}
