//! Delivery options validation
//!
//! This module provides the fail-fast checks run by the staged builder and by
//! every conversion of an externally loaded settings record.
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `field_validators`: Single-field checks (project id, retry count, API key, endpoint)
//! - `options_validators`: The complete, ordered validation of a settings record
//! - `tests`: Test suite for all validators

mod field_validators;
mod options_validators;
mod trait_def;

pub use trait_def::Validate;

pub use field_validators::{
    validate_api_key_format, validate_endpoint, validate_max_retry_attempts,
    validate_project_id, validate_project_uuid,
};
pub use options_validators::validate_complete;
pub(crate) use options_validators::validate_parsed;
