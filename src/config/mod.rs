//! Delivery options configuration
//!
//! This module handles building, loading and validating the options used by
//! the Delivery client.

pub mod builder;
pub mod loader;
pub mod models;
pub mod validation;

pub use builder::{ApiModeSteps, DeliveryOptionsBuilder, OptionalSteps};
pub use loader::{DEFAULT_SECTION, ENV_PREFIX};
pub use models::*;
pub use validation::Validate;
