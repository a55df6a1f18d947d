//! Message severity levels.

use std::fmt;

/// Severity attached to a log message, ordered from lowest to highest.
///
/// The ordering is informational only: duolog never filters by a minimum
/// level. The level decides the bracketed tag in the formatted line and,
/// for screen output, whether the line goes to stdout or stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// The bracketed tag used in formatted output.
    ///
    /// Note that `Warning` renders as `[WARN]`.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warning => "[WARN]",
            Level::Error => "[ERROR]",
            Level::Fatal => "[FATAL]",
        }
    }

    /// Whether screen output for this level goes to stderr instead of stdout.
    ///
    /// DEBUG, INFO and WARNING are routine output; ERROR and FATAL are
    /// error-stream output.
    pub fn uses_stderr(&self) -> bool {
        match self {
            Level::Debug | Level::Info | Level::Warning => false,
            Level::Error | Level::Fatal => true,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
