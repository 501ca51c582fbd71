//! Validated delivery options

use super::*;
use crate::config::validation::validate_parsed;
use crate::utils::error::{DeliveryError, Result};
use std::fmt;
use uuid::Uuid;

/// Which Delivery API the client talks to
///
/// Preview and secured production are mutually exclusive, so they are
/// variants of one enum instead of two flags.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiMode {
    /// Public production API, no key
    Production,
    /// Preview API, unpublished content included
    Preview { api_key: String },
    /// Production API protected by a key
    SecuredProduction { api_key: String },
}

impl ApiMode {
    /// Key sent with requests in this mode
    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::Production => None,
            Self::Preview { api_key } | Self::SecuredProduction { api_key } => Some(api_key),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Preview { .. })
    }

    pub fn is_secured_production(&self) -> bool {
        matches!(self, Self::SecuredProduction { .. })
    }
}

impl fmt::Debug for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("Production"),
            Self::Preview { .. } => f.write_str("Preview { api_key: <redacted> }"),
            Self::SecuredProduction { .. } => {
                f.write_str("SecuredProduction { api_key: <redacted> }")
            }
        }
    }
}

/// Immutable, validated settings consumed by [`crate::DeliveryClient`]
///
/// Values are obtained from [`crate::DeliveryOptionsBuilder`] or by converting a
/// [`DeliveryOptionsSettings`] record, both of which run the complete
/// validation exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOptions {
    project_id: Uuid,
    mode: ApiMode,
    production_endpoint: String,
    preview_endpoint: String,
    wait_for_loading_new_content: bool,
    enable_resilience_logic: bool,
    max_retry_attempts: u32,
}

impl DeliveryOptions {
    /// Project identifier
    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    /// Selected API mode
    pub fn mode(&self) -> &ApiMode {
        &self.mode
    }

    pub fn use_preview_api(&self) -> bool {
        self.mode.is_preview()
    }

    pub fn use_secured_production_api(&self) -> bool {
        self.mode.is_secured_production()
    }

    pub fn preview_api_key(&self) -> Option<&str> {
        match &self.mode {
            ApiMode::Preview { api_key } => Some(api_key),
            _ => None,
        }
    }

    pub fn secured_production_api_key(&self) -> Option<&str> {
        match &self.mode {
            ApiMode::SecuredProduction { api_key } => Some(api_key),
            _ => None,
        }
    }

    pub fn production_endpoint(&self) -> &str {
        &self.production_endpoint
    }

    pub fn preview_endpoint(&self) -> &str {
        &self.preview_endpoint
    }

    pub fn wait_for_loading_new_content(&self) -> bool {
        self.wait_for_loading_new_content
    }

    pub fn enable_resilience_logic(&self) -> bool {
        self.enable_resilience_logic
    }

    pub fn max_retry_attempts(&self) -> u32 {
        self.max_retry_attempts
    }

    /// Endpoint template used by the selected mode
    pub fn active_endpoint(&self) -> &str {
        if self.mode.is_preview() {
            &self.preview_endpoint
        } else {
            &self.production_endpoint
        }
    }

    /// Resolve the active endpoint template for a request path
    ///
    /// Every `{0}` placeholder is replaced by `path`. Custom endpoints without
    /// a placeholder get the path appended after a single `/`.
    pub fn endpoint_url(&self, path: &str) -> String {
        let template = self.active_endpoint();
        let path = path.trim_start_matches('/');

        if template.contains(ENDPOINT_PLACEHOLDER) {
            template.replace(ENDPOINT_PLACEHOLDER, path)
        } else if path.is_empty() {
            template.to_string()
        } else {
            format!("{}/{}", template.trim_end_matches('/'), path)
        }
    }

    /// Load and validate options from a YAML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        DeliveryOptionsSettings::from_file(path)?.try_into()
    }

    /// Load and validate options from `DELIVERY_*` environment variables
    pub fn from_env() -> Result<Self> {
        DeliveryOptionsSettings::from_env()?.try_into()
    }
}

impl TryFrom<DeliveryOptionsSettings> for DeliveryOptions {
    type Error = DeliveryError;

    fn try_from(settings: DeliveryOptionsSettings) -> Result<Self> {
        let (project_id, max_retry_attempts) = validate_parsed(&settings)?;

        let mode = match (
            settings.use_preview_api,
            settings.use_secured_production_api,
        ) {
            (true, _) => ApiMode::Preview {
                api_key: settings.preview_api_key.unwrap_or_default(),
            },
            (false, true) => ApiMode::SecuredProduction {
                api_key: settings.secured_production_api_key.unwrap_or_default(),
            },
            (false, false) => ApiMode::Production,
        };

        Ok(Self {
            project_id,
            mode,
            production_endpoint: settings.production_endpoint,
            preview_endpoint: settings.preview_endpoint,
            wait_for_loading_new_content: settings.wait_for_loading_new_content,
            enable_resilience_logic: settings.enable_resilience_logic,
            max_retry_attempts,
        })
    }
}
