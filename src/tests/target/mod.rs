//! Target module tests.

mod projection_tests;
