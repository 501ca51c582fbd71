//! Flat delivery settings record

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery settings as they appear in configuration files and environment
///
/// This is the unvalidated shape: both mode flags can be set, keys can be
/// missing and the retry count can be negative. Convert it into
/// [`DeliveryOptions`] to run the full validation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOptionsSettings {
    /// Project identifier
    #[serde(default)]
    pub project_id: Option<String>,
    /// Production endpoint template
    #[serde(default = "default_production_endpoint")]
    pub production_endpoint: String,
    /// Preview endpoint template
    #[serde(default = "default_preview_endpoint")]
    pub preview_endpoint: String,
    /// Whether the Preview API is used
    #[serde(default)]
    pub use_preview_api: bool,
    /// Preview API key
    #[serde(default)]
    pub preview_api_key: Option<String>,
    /// Whether the production API is accessed with a key
    #[serde(default)]
    pub use_secured_production_api: bool,
    /// Secured production API key
    #[serde(default)]
    pub secured_production_api_key: Option<String>,
    /// Wait for updated content, e.g. when acting on a webhook
    #[serde(default)]
    pub wait_for_loading_new_content: bool,
    /// Whether HTTP requests use retry logic
    #[serde(default = "default_true")]
    pub enable_resilience_logic: bool,
    /// Maximum retry attempts
    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: i32,
}

impl Default for DeliveryOptionsSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            production_endpoint: default_production_endpoint(),
            preview_endpoint: default_preview_endpoint(),
            use_preview_api: false,
            preview_api_key: None,
            use_secured_production_api: false,
            secured_production_api_key: None,
            wait_for_loading_new_content: false,
            enable_resilience_logic: default_true(),
            max_retry_attempts: default_max_retry_attempts(),
        }
    }
}

impl fmt::Debug for DeliveryOptionsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");

        f.debug_struct("DeliveryOptionsSettings")
            .field("project_id", &self.project_id)
            .field("production_endpoint", &self.production_endpoint)
            .field("preview_endpoint", &self.preview_endpoint)
            .field("use_preview_api", &self.use_preview_api)
            .field("preview_api_key", &redact(&self.preview_api_key))
            .field("use_secured_production_api", &self.use_secured_production_api)
            .field(
                "secured_production_api_key",
                &redact(&self.secured_production_api_key),
            )
            .field(
                "wait_for_loading_new_content",
                &self.wait_for_loading_new_content,
            )
            .field("enable_resilience_logic", &self.enable_resilience_logic)
            .field("max_retry_attempts", &self.max_retry_attempts)
            .finish()
    }
}

impl DeliveryOptionsSettings {
    /// Create settings for a project with every other field at its default
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }
}

impl From<&DeliveryOptions> for DeliveryOptionsSettings {
    fn from(options: &DeliveryOptions) -> Self {
        let (preview_api_key, secured_production_api_key) = match options.mode() {
            ApiMode::Production => (None, None),
            ApiMode::Preview { api_key } => (Some(api_key.clone()), None),
            ApiMode::SecuredProduction { api_key } => (None, Some(api_key.clone())),
        };

        Self {
            project_id: Some(options.project_id().to_string()),
            production_endpoint: options.production_endpoint().to_string(),
            preview_endpoint: options.preview_endpoint().to_string(),
            use_preview_api: options.use_preview_api(),
            preview_api_key,
            use_secured_production_api: options.use_secured_production_api(),
            secured_production_api_key,
            wait_for_loading_new_content: options.wait_for_loading_new_content(),
            enable_resilience_logic: options.enable_resilience_logic(),
            max_retry_attempts: i32::try_from(options.max_retry_attempts()).unwrap_or(i32::MAX),
        }
    }
}
