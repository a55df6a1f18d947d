//! Tests for the in-memory screen implementation.

use std::io::Write;

use crate::io::{MemoryScreen, ScreenTarget};

#[test]
fn out_and_err_streams_are_separate() {
    let screen = MemoryScreen::new();

    {
        let mut out = screen.open_out().unwrap();
        out.write_all(b"routine\n").unwrap();
    }
    {
        let mut err = screen.open_err().unwrap();
        err.write_all(b"failure\n").unwrap();
    }

    assert_eq!(screen.out_string(), "routine\n");
    assert_eq!(screen.err_string(), "failure\n");
}

#[test]
fn clones_share_buffers() {
    let screen = MemoryScreen::new();
    let observer = screen.clone();

    let mut out = screen.open_out().unwrap();
    out.write_all(b"shared").unwrap();

    assert_eq!(observer.out_string(), "shared");
}

#[test]
fn clear_empties_both_streams() {
    let screen = MemoryScreen::new();
    screen.open_out().unwrap().write_all(b"a").unwrap();
    screen.open_err().unwrap().write_all(b"b").unwrap();

    screen.clear();

    assert!(screen.out_contents().is_empty());
    assert!(screen.err_contents().is_empty());
}
