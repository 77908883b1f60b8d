//! Unit test target covering the analytics pipeline through the public API

mod analytics_tests;
