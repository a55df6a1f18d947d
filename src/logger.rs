//! The logger state machine: target flags, formatting state, sinks.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CloseStatus, OpenStatus, SinkError};
use crate::format::MessageFormat;
use crate::io::{ConsoleScreen, FileSink, ScreenTarget};
use crate::level::Level;
use crate::target::Target;

/// Prefix carried by every internally generated diagnostic line.
const SELF_LOG_PREFIX: &str = "[LOGGER INTERNAL SELF-LOG] -";

/// A leveled logger writing to the screen, a log file, or both.
///
/// Defaults: screen logging on, file logging off, timestamps on, empty
/// identifier, no configured path, no open handle. All state mutates in
/// place through setters; the file handle opens lazily on the first
/// file-directed write and is released deterministically on
/// [`Logger::close_log_file`], on path or target changes that disable it,
/// and on drop.
///
/// The logger never panics or returns an error from [`Logger::log`] because
/// a line could not be written: sink failures become a FATAL self-diagnostic
/// forced to the screen (never to the file, so a broken file sink cannot
/// recurse).
///
/// There is no internal locking. Sharing one instance across threads
/// requires external synchronization; `&mut self` on every logging call
/// makes the exclusive ownership explicit.
#[derive(Debug)]
pub struct Logger {
    screen_enabled: bool,
    file_enabled: bool,
    format: MessageFormat,
    screen: Box<dyn ScreenTarget>,
    file: FileSink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger with the default settings, writing to the process's
    /// stdout and stderr.
    pub fn new() -> Self {
        Self::with_screen(Box::new(ConsoleScreen::new()))
    }

    /// Create a logger with a custom screen target.
    ///
    /// This is the seam used by tests to capture screen output; production
    /// callers normally use [`Logger::new`].
    pub fn with_screen(screen: Box<dyn ScreenTarget>) -> Self {
        Self {
            screen_enabled: true,
            file_enabled: false,
            format: MessageFormat::new("", true),
            screen,
            file: FileSink::new(),
        }
    }

    /// The version of the logger library itself.
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The identifier prefixed to every message; empty means no prefix.
    pub fn identifier(&self) -> &str {
        self.format.identifier()
    }

    /// Set the identifier prefix. No validation is performed; the empty
    /// string disables the prefix entirely.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.format.set_identifier(identifier);
    }

    /// Whether log lines carry a local date-time segment.
    pub fn timestamps(&self) -> bool {
        self.format.timestamps()
    }

    /// Enable or disable the timestamp segment. Pure state mutation.
    pub fn set_timestamps(&mut self, timestamps: bool) {
        self.format.set_timestamps(timestamps);
    }

    /// The configured log file path, if any.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.file.path()
    }

    /// Store a new log file path.
    ///
    /// If a handle is currently open it is closed first, so the next
    /// file-directed write reopens against the new path. The file is not
    /// opened eagerly. A close failure is reported as a self-diagnostic and
    /// does not prevent the path from being stored.
    pub fn set_log_file_path(&mut self, path: impl Into<PathBuf>) {
        if let Err(e) = self.file.set_path(path) {
            self.self_diagnostic(&format!("an I/O error occurred while closing the log file: {e}"));
        }
    }

    /// Store a new log file path and enable file-target logging.
    pub fn set_log_file_path_and_enable(&mut self, path: impl Into<PathBuf>) {
        self.set_log_file_path(path);
        self.file_enabled = true;
    }

    /// Set the global logging target.
    ///
    /// Switching to [`Target::Screen`] closes an open file handle on the
    /// spot, since file logging is being disabled.
    pub fn set_target(&mut self, target: Target) {
        if target == Target::Screen && self.file.is_open() {
            if let Err(e) = self.file.close() {
                self.self_diagnostic(&format!(
                    "an I/O error occurred while closing the log file: {e}"
                ));
            }
        }

        let (screen, file) = target.flags();
        self.screen_enabled = screen;
        self.file_enabled = file;
    }

    /// The global logging target, derived from the two destination flags.
    pub fn target(&self) -> Target {
        Target::from_flags(self.screen_enabled, self.file_enabled)
    }

    /// Log a message to the destinations selected by the global target.
    ///
    /// Both destinations may fire for the same call when the target is
    /// [`Target::Both`].
    pub fn log(&mut self, level: Level, message: &str) {
        if self.screen_enabled {
            self.write_screen(level, message);
        }

        if self.file_enabled {
            self.write_file(level, message);
        }
    }

    /// Log a message to an explicit one-shot target, ignoring the stored
    /// flags entirely for this call. Stored state is not mutated.
    pub fn log_to(&mut self, level: Level, message: &str, target: Target) {
        match target {
            Target::None => {}
            Target::Screen => self.write_screen(level, message),
            Target::File => self.write_file(level, message),
            Target::Both => {
                self.write_screen(level, message);
                self.write_file(level, message);
            }
        }
    }

    /// Explicitly open the log file handle in append mode.
    ///
    /// Returns [`OpenStatus::AlreadyOpen`] as a no-op signal when a handle
    /// is open. On failure a FATAL self-diagnostic is emitted to the screen
    /// and the error is returned.
    pub fn open_log_file(&mut self) -> Result<OpenStatus, SinkError> {
        match self.file.open() {
            Ok(status) => Ok(status),
            Err(e) => {
                self.self_diagnostic(&format!(
                    "an I/O error occurred while opening the log file: {e}"
                ));
                Err(e)
            }
        }
    }

    /// Explicitly flush and release the log file handle.
    ///
    /// Returns [`CloseStatus::AlreadyClosed`] as a no-op signal when no
    /// handle is open. On failure a FATAL self-diagnostic is emitted to the
    /// screen and the error is returned; the handle is released regardless.
    pub fn close_log_file(&mut self) -> Result<CloseStatus, SinkError> {
        match self.file.close() {
            Ok(status) => Ok(status),
            Err(e) => {
                self.self_diagnostic(&format!(
                    "an I/O error occurred while closing the log file: {e}"
                ));
                Err(e)
            }
        }
    }

    /// Whether a file handle is currently open.
    pub fn log_file_is_open(&self) -> bool {
        self.file.is_open()
    }

    /// Log a message at [`Level::Debug`] to the global target.
    pub fn debug(&mut self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Log a message at [`Level::Info`] to the global target.
    pub fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Log a message at [`Level::Warning`] to the global target.
    pub fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message);
    }

    /// Log a message at [`Level::Error`] to the global target.
    pub fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Log a message at [`Level::Fatal`] to the global target.
    pub fn fatal(&mut self, message: &str) {
        self.log(Level::Fatal, message);
    }

    fn write_screen(&mut self, level: Level, message: &str) {
        let line = self.format.render(level, message);

        // Screen failures have no further fallback destination; drop them.
        let stream = if level.uses_stderr() {
            self.screen.open_err()
        } else {
            self.screen.open_out()
        };
        if let Ok(mut stream) = stream {
            let _ = writeln!(stream, "{line}");
        }
    }

    fn write_file(&mut self, level: Level, message: &str) {
        let line = self.format.render(level, message);

        match self.file.write_line(&line) {
            Ok(()) => {}
            Err(SinkError::PathNotSet) => {
                self.self_diagnostic(
                    "file logging is enabled but log file is not set, not logging to file",
                );
            }
            Err(e) => {
                self.self_diagnostic(&format!(
                    "an I/O error occurred while writing to the log file: {e}"
                ));
            }
        }
    }

    /// Emit a FATAL diagnostic about the logger's own failure, forced to the
    /// screen so it can never recurse into a failing file sink.
    fn self_diagnostic(&mut self, detail: &str) {
        let message = format!("{SELF_LOG_PREFIX} {detail}");
        self.log_to(Level::Fatal, &message, Target::Screen);
    }
}
