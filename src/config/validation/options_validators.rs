//! Complete delivery options validation
//!
//! The checks run in a fixed order and stop at the first violation, so a
//! given malformed record always reports the same error.

use super::field_validators::*;
use super::trait_def::Validate;
use crate::config::models::DeliveryOptionsSettings;
use crate::utils::error::{DeliveryError, Result};
use tracing::debug;
use uuid::Uuid;

/// Validate a settings record as a whole
///
/// Order of checks:
/// 1. project identifier
/// 2. maximum retry attempts
/// 3. preview and secured production are not both enabled
/// 4. preview key is set and well-formed when preview is enabled
/// 5. secured production key is set and well-formed when secured production is enabled
/// 6. both endpoints are absolute http(s) URLs
pub fn validate_complete(settings: &DeliveryOptionsSettings) -> Result<()> {
    validate_parsed(settings).map(|_| ())
}

/// Run [`validate_complete`] and hand back the parsed project id and retry count
pub(crate) fn validate_parsed(settings: &DeliveryOptionsSettings) -> Result<(Uuid, u32)> {
    debug!("Validating delivery options");

    let project_id = validate_project_id(settings.project_id.as_deref())?;
    let max_retry_attempts = validate_max_retry_attempts(settings.max_retry_attempts)?;

    if settings.use_preview_api && settings.use_secured_production_api {
        return Err(DeliveryError::ConflictingState(
            "Preview API and Secured Production API can't be used at the same time".to_string(),
        ));
    }

    if settings.use_preview_api {
        require_key(
            settings.preview_api_key.as_deref(),
            "preview_api_key",
            "The Preview API key must be set while using the Preview API",
        )?;
    }

    if settings.use_secured_production_api {
        require_key(
            settings.secured_production_api_key.as_deref(),
            "secured_production_api_key",
            "The Secured Production API key must be set while using the Secured Production API",
        )?;
    }

    validate_endpoint(Some(&settings.production_endpoint), "production_endpoint")?;
    validate_endpoint(Some(&settings.preview_endpoint), "preview_endpoint")?;

    debug!("Delivery options validation completed");
    Ok((project_id, max_retry_attempts))
}

fn require_key(api_key: Option<&str>, field: &'static str, message: &str) -> Result<()> {
    match api_key {
        None | Some("") => Err(DeliveryError::ConflictingState(message.to_string())),
        key => validate_api_key_format(key, field),
    }
}

impl Validate for DeliveryOptionsSettings {
    fn validate(&self) -> Result<()> {
        validate_complete(self)
    }
}
