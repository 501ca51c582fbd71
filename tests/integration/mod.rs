//! Integration tests for delivery-rs
//!
//! These tests exercise the public API end to end without mocking.

pub mod config_loading_tests;
pub mod options_builder_tests;
