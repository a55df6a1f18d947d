//! Message preformatting: identifier prefix, timestamp, level tag.

use chrono::Local;

use crate::level::Level;

/// Format used for local timestamps in log lines.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatting state for log lines.
///
/// Produces lines of the shape `[<identifier> ][<timestamp> ]<tag> <message>`:
/// the identifier plus a single space when non-empty, a bracketed local
/// date-time plus a space when timestamps are enabled, then the bracketed
/// level tag, a space, and the raw message.
#[derive(Debug, Clone, Default)]
pub struct MessageFormat {
    identifier: String,
    timestamps: bool,
}

impl MessageFormat {
    /// Create a format with the given identifier and timestamp setting.
    pub fn new(identifier: impl Into<String>, timestamps: bool) -> Self {
        Self {
            identifier: identifier.into(),
            timestamps,
        }
    }

    /// The identifier prefix. Empty means no prefix is emitted.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Set the identifier prefix. No validation; an empty string disables
    /// the prefix entirely.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Whether a timestamp segment is included.
    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Enable or disable the timestamp segment.
    pub fn set_timestamps(&mut self, timestamps: bool) {
        self.timestamps = timestamps;
    }

    /// Build the prefix for a message at `level`: identifier, timestamp and
    /// level tag, each followed by a single space.
    pub fn preformat(&self, level: Level) -> String {
        let mut prefix = String::new();

        if !self.identifier.is_empty() {
            prefix.push_str(&self.identifier);
            prefix.push(' ');
        }

        if self.timestamps {
            let now = Local::now();
            prefix.push('[');
            prefix.push_str(&now.format(TIMESTAMP_FORMAT).to_string());
            prefix.push_str("] ");
        }

        prefix.push_str(level.tag());
        prefix.push(' ');

        prefix
    }

    /// Render a complete log line (without trailing newline).
    pub fn render(&self, level: Level, message: &str) -> String {
        let mut line = self.preformat(level);
        line.push_str(message);
        line
    }
}
