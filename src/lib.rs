//! # duolog
//!
//! A small local logging library with screen and file targets.
//!
//! ## Overview
//!
//! duolog provides:
//! - **Leveled messages**: DEBUG through FATAL, tagged in every line
//! - **Two destinations**: screen (stdout/stderr) and an append-only log
//!   file, selectable globally or per call
//! - **Optional line decoration**: an identifier prefix and a local
//!   date-time stamp
//! - **Transparent file lifecycle**: the file handle opens lazily on the
//!   first file-directed write, every line is flushed before the call
//!   returns, and the handle is released deterministically
//! - **Best-effort delivery**: a log call never panics or returns an error
//!   because a line could not be written; sink failures surface as a FATAL
//!   self-diagnostic on the screen
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use duolog::{Level, Logger, LoggerBuilder, Target};
//!
//! let mut logger = LoggerBuilder::new()
//!     .identifier("[myapp]")
//!     .log_file("/var/log/myapp.log")
//!     .build();
//!
//! logger.log(Level::Info, "service started");          // screen + file
//! logger.log_to(Level::Debug, "verbose", Target::File); // file only, one-shot
//!
//! logger.set_target(Target::Screen); // closes the file handle on the spot
//! logger.warning("file logging disabled");
//! ```
//!
//! ## Semantics
//!
//! - DEBUG, INFO and WARNING screen lines go to stdout; ERROR and FATAL go
//!   to stderr.
//! - The formatted line is `[<identifier> ][<timestamp> ]<tag> <message>`,
//!   each prefix segment followed by a single space and omitted when
//!   disabled.
//! - Levels are ordered but never filtered: duolog has no minimum-severity
//!   gate.
//! - The global target round-trips: `target()` after `set_target(t)` is
//!   exactly `t` for all four values.
//! - One logger owns its file handle exclusively. There is no internal
//!   locking and no cross-process coordination; concurrent use of a single
//!   instance requires external synchronization.

// Core modules
pub mod builder;
pub mod error;
pub mod format;
pub mod io;
pub mod level;
pub mod logger;
pub mod target;

// Re-exports for convenience
pub use builder::LoggerBuilder;
pub use error::{CloseStatus, OpenStatus, SinkError, Stage};
pub use format::MessageFormat;
pub use io::{ConsoleScreen, FileSink, MemoryScreen, ScreenTarget};
pub use level::Level;
pub use logger::Logger;
pub use target::Target;

/// The version of the logger library itself, also available as
/// [`Logger::version`].
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
