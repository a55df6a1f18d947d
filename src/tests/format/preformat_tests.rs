//! Tests for message preformatting.

use crate::{Level, MessageFormat};

#[test]
fn identifier_and_tag_without_timestamp() {
    let format = MessageFormat::new("[TAG]", false);
    assert_eq!(format.render(Level::Info, "hello"), "[TAG] [INFO] hello");
}

#[test]
fn empty_identifier_emits_no_leading_space() {
    let format = MessageFormat::new("", false);
    assert_eq!(format.render(Level::Debug, "msg"), "[DEBUG] msg");
}

#[test]
fn warning_renders_as_warn() {
    let format = MessageFormat::new("", false);
    assert_eq!(format.render(Level::Warning, "careful"), "[WARN] careful");
}

#[test]
fn all_level_tags() {
    assert_eq!(Level::Debug.tag(), "[DEBUG]");
    assert_eq!(Level::Info.tag(), "[INFO]");
    assert_eq!(Level::Warning.tag(), "[WARN]");
    assert_eq!(Level::Error.tag(), "[ERROR]");
    assert_eq!(Level::Fatal.tag(), "[FATAL]");
}

#[test]
fn timestamp_segment_is_bracketed_and_precedes_tag() {
    let format = MessageFormat::new("", true);
    let line = format.render(Level::Info, "hello");

    // "[YYYY-MM-DD HH:MM:SS] [INFO] hello"
    assert!(line.starts_with('['), "no leading space before timestamp: {line:?}");
    let close = line.find(']').expect("timestamp closing bracket");
    let stamp = &line[1..close];
    assert_eq!(stamp.len(), "2009-07-30 12:00:00".len(), "stamp was {stamp:?}");
    assert!(line[close..].starts_with("] [INFO] hello"));
}

#[test]
fn identifier_comes_before_timestamp() {
    let format = MessageFormat::new("svc", true);
    let line = format.render(Level::Error, "boom");
    assert!(line.starts_with("svc ["), "line was {line:?}");
    assert!(line.ends_with("] [ERROR] boom"));
}

#[test]
fn setters_mutate_in_place() {
    let mut format = MessageFormat::default();
    assert_eq!(format.identifier(), "");
    assert!(!format.timestamps());

    format.set_identifier("x");
    format.set_timestamps(false);
    assert_eq!(format.identifier(), "x");
    assert_eq!(format.render(Level::Fatal, "m"), "x [FATAL] m");
}
