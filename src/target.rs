//! Log destination selection.

/// Destination selector for a log line: nothing, the screen, the configured
/// file, or both.
///
/// The logger stores two independent booleans internally; `Target` is a
/// derived projection over them. `Logger::target()` after
/// `Logger::set_target(t)` returns exactly `t` for all four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Discard the message entirely.
    None,
    /// stdout/stderr only.
    #[default]
    Screen,
    /// The configured log file only.
    File,
    /// Screen and file.
    Both,
}

impl Target {
    /// Derive the target from the (screen, file) flag pair. Total: every
    /// combination maps to a distinct variant.
    pub fn from_flags(screen: bool, file: bool) -> Self {
        match (screen, file) {
            (false, false) => Target::None,
            (true, false) => Target::Screen,
            (false, true) => Target::File,
            (true, true) => Target::Both,
        }
    }

    /// Project back to the (screen, file) flag pair. Inverse of
    /// [`Target::from_flags`].
    pub fn flags(&self) -> (bool, bool) {
        match self {
            Target::None => (false, false),
            Target::Screen => (true, false),
            Target::File => (false, true),
            Target::Both => (true, true),
        }
    }

    /// Whether this target includes the screen destination.
    pub fn includes_screen(&self) -> bool {
        self.flags().0
    }

    /// Whether this target includes the file destination.
    pub fn includes_file(&self) -> bool {
        self.flags().1
    }
}
