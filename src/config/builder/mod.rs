//! Staged builder for delivery options
//!
//! Every stage is its own type and only exposes the calls that are legal at
//! that point, so skipping the project id or setting an endpoint before the
//! API mode is chosen does not compile:
//!
//! ```text
//! DeliveryOptionsBuilder --with_project_id--> ApiModeSteps
//! ApiModeSteps --use_production_api / use_preview_api / use_secured_production_api--> OptionalSteps
//! OptionalSteps --(optional calls)*--> OptionalSteps --build--> DeliveryOptions
//! ```

mod options_builder;
mod types;

pub use types::{ApiModeSteps, DeliveryOptionsBuilder, OptionalSteps};
