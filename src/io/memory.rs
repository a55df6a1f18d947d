//! In-memory screen implementation for testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::ScreenTarget;

/// In-memory screen target for testing.
///
/// Captures the routine and error streams into separate buffers so tests
/// can assert on exactly what would have reached stdout and stderr. Cloning
/// shares the underlying buffers.
#[derive(Debug, Clone, Default)]
pub struct MemoryScreen {
    out: Arc<Mutex<Vec<u8>>>,
    err: Arc<Mutex<Vec<u8>>>,
}

impl MemoryScreen {
    /// Create a new empty in-memory screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the captured routine-stream bytes.
    pub fn out_contents(&self) -> Vec<u8> {
        self.out.lock().unwrap().clone()
    }

    /// Get the captured routine stream as a string.
    pub fn out_string(&self) -> String {
        String::from_utf8_lossy(&self.out_contents()).into_owned()
    }

    /// Get the captured error-stream bytes.
    pub fn err_contents(&self) -> Vec<u8> {
        self.err.lock().unwrap().clone()
    }

    /// Get the captured error stream as a string.
    pub fn err_string(&self) -> String {
        String::from_utf8_lossy(&self.err_contents()).into_owned()
    }

    /// Clear both captured streams.
    pub fn clear(&self) {
        self.out.lock().unwrap().clear();
        self.err.lock().unwrap().clear();
    }
}

impl ScreenTarget for MemoryScreen {
    fn open_out(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(MemoryWriteHandle {
            buf: self.out.clone(),
        }))
    }

    fn open_err(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(MemoryWriteHandle {
            buf: self.err.clone(),
        }))
    }
}

/// Write handle for one in-memory stream.
struct MemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl std::fmt::Debug for MemoryWriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryWriteHandle").finish()
    }
}

impl Write for MemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
