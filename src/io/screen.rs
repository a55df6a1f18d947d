//! Screen destination trait and console implementation.

use std::fmt::Debug;
use std::io::{self, Write};

/// Trait for the screen destination of log lines.
///
/// Implementors provide writable streams for routine output and error
/// output. The console implementation maps these to stdout and stderr;
/// in-memory implementations exist for testing.
pub trait ScreenTarget: Send + Debug {
    /// Open the routine output stream (DEBUG, INFO, WARNING lines).
    fn open_out(&self) -> io::Result<Box<dyn Write + Send>>;

    /// Open the error output stream (ERROR, FATAL lines).
    fn open_err(&self) -> io::Result<Box<dyn Write + Send>>;
}

/// Screen target backed by the process's stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleScreen;

impl ConsoleScreen {
    /// Create a new console screen target.
    pub fn new() -> Self {
        Self
    }
}

impl ScreenTarget for ConsoleScreen {
    fn open_out(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }

    fn open_err(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}
