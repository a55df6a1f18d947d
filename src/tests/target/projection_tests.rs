//! Tests for the Target/flag projection.

use crate::{Level, Logger, Target};

const ALL_TARGETS: [Target; 4] = [Target::None, Target::Screen, Target::File, Target::Both];

#[test]
fn flags_round_trip_for_all_targets() {
    for target in ALL_TARGETS {
        let (screen, file) = target.flags();
        assert_eq!(Target::from_flags(screen, file), target);
    }
}

#[test]
fn from_flags_is_total_and_distinct() {
    let derived = [
        Target::from_flags(false, false),
        Target::from_flags(true, false),
        Target::from_flags(false, true),
        Target::from_flags(true, true),
    ];
    assert_eq!(derived, ALL_TARGETS);
}

#[test]
fn set_target_round_trips_through_logger() {
    let mut logger = Logger::new();
    for target in ALL_TARGETS {
        logger.set_target(target);
        assert_eq!(logger.target(), target);
    }
}

#[test]
fn includes_helpers_match_flags() {
    assert!(!Target::None.includes_screen());
    assert!(!Target::None.includes_file());
    assert!(Target::Screen.includes_screen());
    assert!(!Target::Screen.includes_file());
    assert!(!Target::File.includes_screen());
    assert!(Target::File.includes_file());
    assert!(Target::Both.includes_screen());
    assert!(Target::Both.includes_file());
}

#[test]
fn default_target_is_screen() {
    assert_eq!(Target::default(), Target::Screen);
    assert_eq!(Logger::new().target(), Target::Screen);
}

#[test]
fn levels_order_by_severity() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Fatal);
}
