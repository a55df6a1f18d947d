//! Internal unit tests, one directory per area.

mod target;
