//! Utility modules for the Delivery SDK
//!
//! - **error**: Error type and result alias shared by every module

pub mod error;

pub use error::{DeliveryError, ErrorKind, Result};
