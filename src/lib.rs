//! # delivery-rs
//!
//! Client SDK for the Kentico Cloud Delivery API.
//!
//! Options are assembled with a staged builder: the project id comes first,
//! then exactly one API mode, then any optional settings. Each step validates
//! its argument immediately and `build` validates the whole record once more,
//! so a [`DeliveryOptions`] value is always consistent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use delivery_rs::{DeliveryClientBuilder, DeliveryOptionsBuilder};
//!
//! fn main() -> delivery_rs::Result<()> {
//!     let options = DeliveryOptionsBuilder::new()
//!         .with_project_id("550cec62-90a6-4ab3-b3e4-3d0bb4c04f5c")?
//!         .use_preview_api("header.payload.signature")?
//!         .with_max_retry_attempts(3)?
//!         .build()?;
//!
//!     let client = DeliveryClientBuilder::with_delivery_options(options).build()?;
//!     println!("{}", client.url_for("items"));
//!     Ok(())
//! }
//! ```
//!
//! ## Loading from configuration
//!
//! ```rust,no_run
//! use delivery_rs::DeliveryOptions;
//!
//! fn main() -> delivery_rs::Result<()> {
//!     // Reads DELIVERY_PROJECT_ID, DELIVERY_USE_PREVIEW_API, ...
//!     let options = DeliveryOptions::from_env()?;
//!     let from_file = DeliveryOptions::from_file("config/delivery.yaml")?;
//!     assert_eq!(options.project_id(), from_file.project_id());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]

pub mod client;
pub mod config;
pub mod utils;

pub use client::{
    DefaultResiliencePolicyProvider, DeliveryClient, DeliveryClientBuilder,
    DeliveryClientOptionalSteps, ResiliencePolicyProvider, RetryPolicy,
};
pub use config::{
    ApiMode, ApiModeSteps, DeliveryOptions, DeliveryOptionsBuilder, DeliveryOptionsSettings,
    OptionalSteps, Validate,
};
pub use config::validation::validate_complete;
pub use utils::error::{DeliveryError, ErrorKind, Result};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with a default subscriber
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
