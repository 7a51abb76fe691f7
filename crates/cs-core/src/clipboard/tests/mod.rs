//! Unit tests for the clipboard domain model.

mod negotiate_tests;
mod payload_tests;
