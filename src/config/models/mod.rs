//! Configuration data models
//!
//! This module defines the flat settings record read from external sources
//! and the validated, immutable options value handed to the client.

#![allow(missing_docs)]

pub mod options;
pub mod settings;

pub use options::*;
pub use settings::*;

/// Placeholder substituted in endpoint templates
pub const ENDPOINT_PLACEHOLDER: &str = "{0}";

/// Default production endpoint template
pub const DEFAULT_PRODUCTION_ENDPOINT: &str = "https://deliver.kenticocloud.com/{0}";

/// Default preview endpoint template
pub const DEFAULT_PREVIEW_ENDPOINT: &str = "https://preview-deliver.kenticocloud.com/{0}";

/// Default production endpoint
pub fn default_production_endpoint() -> String {
    DEFAULT_PRODUCTION_ENDPOINT.to_string()
}

/// Default preview endpoint
pub fn default_preview_endpoint() -> String {
    DEFAULT_PREVIEW_ENDPOINT.to_string()
}

/// Default maximum retry attempts
pub fn default_max_retry_attempts() -> i32 {
    5
}

/// Default true value
pub fn default_true() -> bool {
    true
}
