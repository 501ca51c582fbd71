//! Common test utilities for delivery-rs
//!
//! - Test fixtures and data factories
//! - Custom assertions on error kinds

pub mod assertions;
pub mod fixtures;

pub use fixtures::{OptionsFactory, PREVIEW_API_KEY, PROJECT_ID, SECURED_API_KEY};
