//! Delivery client module
//!
//! This module assembles a [`DeliveryClient`] from validated options, an HTTP
//! client and a resilience policy provider. Sending requests and executing
//! retries happen outside this crate.

mod builder;
mod client;
mod resilience;


pub use builder::{DeliveryClientBuilder, DeliveryClientOptionalSteps};
pub use client::{DeliveryClient, SDK_ID, SDK_ID_HEADER, WAIT_FOR_LOADING_NEW_CONTENT_HEADER};
pub use resilience::{DefaultResiliencePolicyProvider, ResiliencePolicyProvider, RetryPolicy};
