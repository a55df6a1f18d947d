//! Error and status types for sink operations.
//!
//! This module provides:
//! - `Stage`: Indicates where a sink operation failed
//! - `SinkError`: A single sink failure with context
//! - `OpenStatus` / `CloseStatus`: no-op signals for handle lifecycle calls
//!
//! No-op conditions (file already open, file already closed) are not errors;
//! they are reported as dedicated `Ok` statuses, distinct from `Err`.

use std::fmt;
use std::io;

use thiserror::Error;

/// Stage of a file-sink operation where a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the log file
    Open,
    Write,
    Flush,
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
            Stage::Close => write!(f, "Close"),
        }
    }
}

/// A single sink failure with context.
///
/// `log` never propagates these to its caller; they are converted into a
/// FATAL self-diagnostic on the screen. The explicit handle lifecycle calls
/// (`open_log_file`, `close_log_file`) do return them, so callers that asked
/// for the operation directly can observe the failure.
#[derive(Debug, Error)]
pub enum SinkError {
    /// File logging was requested but no log file path is configured.
    #[error("file logging is enabled but log file is not set")]
    PathNotSet,

    /// The underlying I/O call failed.
    #[error("[{stage}] {path}: {source}")]
    Io {
        /// Stage where the error occurred
        stage: Stage,
        /// Path of the log file involved
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Wrap an I/O error with its stage and file path context.
    pub(crate) fn io(stage: Stage, path: impl Into<String>, source: io::Error) -> Self {
        SinkError::Io {
            stage,
            path: path.into(),
            source,
        }
    }
}

/// Outcome of an explicit open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    /// A fresh handle was opened.
    Opened,
    /// The handle was already open; nothing was done.
    AlreadyOpen,
}

/// Outcome of an explicit close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStatus {
    /// The open handle was flushed and released.
    Closed,
    /// No handle was open; nothing was done.
    AlreadyClosed,
}
