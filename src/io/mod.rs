//! I/O sinks for log output.
//!
//! This module provides:
//! - `ScreenTarget`: Trait for the screen destination
//! - `ConsoleScreen`: Standard stdout/stderr implementation
//! - `FileSink`: The logger's owned, lazily opened file handle
//! - `MemoryScreen`: In-memory implementation for testing

mod file;
mod memory;
mod screen;

pub use file::FileSink;
pub use memory::MemoryScreen;
pub use screen::{ConsoleScreen, ScreenTarget};
