//! File sink with lazy open/close handle lifecycle.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CloseStatus, OpenStatus, SinkError, Stage};

/// The logger's owned, exclusive file handle.
///
/// The handle is open if and only if `handle` is `Some`: there is no
/// separate open flag to drift out of sync. Opening is lazy (first write
/// opens in append mode) and every written line is flushed before the call
/// returns, so lines are durable immediately.
#[derive(Debug, Default)]
pub struct FileSink {
    path: Option<PathBuf>,
    handle: Option<BufWriter<File>>,
}

impl FileSink {
    /// Create a sink with no configured path and no open handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured log file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a file handle is currently open.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Store a new path, closing any open handle first so that the next
    /// write reopens against the new path.
    ///
    /// The path is stored even when closing the old handle fails; the close
    /// outcome is returned so the caller can report the failure.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<CloseStatus, SinkError> {
        let closed = self.close();
        self.path = Some(path.into());
        closed
    }

    /// Open the file in append mode.
    ///
    /// Returns `AlreadyOpen` without touching the handle if one is open.
    pub fn open(&mut self) -> Result<OpenStatus, SinkError> {
        if self.handle.is_some() {
            return Ok(OpenStatus::AlreadyOpen);
        }

        let path = self.path.as_ref().ok_or(SinkError::PathNotSet)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| SinkError::io(Stage::Open, path.to_string_lossy(), e))?;

        self.handle = Some(BufWriter::new(file));
        Ok(OpenStatus::Opened)
    }

    /// Flush and release the handle.
    ///
    /// Returns `AlreadyClosed` if no handle is open. The handle is released
    /// even when the final flush fails.
    pub fn close(&mut self) -> Result<CloseStatus, SinkError> {
        match self.handle.take() {
            None => Ok(CloseStatus::AlreadyClosed),
            Some(mut handle) => {
                handle.flush().map_err(|e| {
                    SinkError::io(Stage::Close, self.path_display(), e)
                })?;
                Ok(CloseStatus::Closed)
            }
        }
    }

    /// Write one line (newline appended) and flush it to disk.
    ///
    /// Opens the handle lazily if needed. Fails with `PathNotSet` when no
    /// path is configured.
    pub fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.open()?;
        let path = self.path_display();

        // open() succeeded, so a handle is present
        let Some(handle) = self.handle.as_mut() else {
            return Err(SinkError::PathNotSet);
        };

        writeln!(handle, "{line}").map_err(|e| SinkError::io(Stage::Write, path.clone(), e))?;
        handle
            .flush()
            .map_err(|e| SinkError::io(Stage::Flush, path, e))?;

        Ok(())
    }

    fn path_display(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Best effort: flush whatever is buffered before the handle goes away.
        let _ = self.close();
    }
}
