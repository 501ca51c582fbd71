//! Validation trait definition
//!
//! This module defines the core Validate trait used by configuration records.

use crate::utils::error::Result;

/// Validation trait for configuration records
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
