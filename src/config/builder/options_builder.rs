//! Staged options builder implementation

use super::types::{ApiModeSteps, DeliveryOptionsBuilder, OptionalSteps};
use crate::config::models::{DeliveryOptions, DeliveryOptionsSettings};
use crate::config::validation::{
    validate_api_key_format, validate_endpoint, validate_max_retry_attempts,
    validate_project_id, validate_project_uuid,
};
use crate::utils::error::Result;
use tracing::debug;
use uuid::Uuid;

impl DeliveryOptionsBuilder {
    /// Start building delivery options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project identifier from its string form
    pub fn with_project_id(self, project_id: impl AsRef<str>) -> Result<ApiModeSteps> {
        let project_id = validate_project_id(Some(project_id.as_ref()))?;
        Ok(self.into_mode_steps(project_id))
    }

    /// Set the project identifier
    pub fn with_project_uuid(self, project_id: Uuid) -> Result<ApiModeSteps> {
        let project_id = validate_project_uuid(project_id)?;
        Ok(self.into_mode_steps(project_id))
    }

    fn into_mode_steps(mut self, project_id: Uuid) -> ApiModeSteps {
        self.settings.project_id = Some(project_id.to_string());
        ApiModeSteps {
            settings: self.settings,
        }
    }
}

impl ApiModeSteps {
    /// Use the public production API
    pub fn use_production_api(self) -> OptionalSteps {
        self.into_optional_steps()
    }

    /// Use the Preview API with the given key
    pub fn use_preview_api(mut self, preview_api_key: impl Into<String>) -> Result<OptionalSteps> {
        let preview_api_key = preview_api_key.into();
        validate_api_key_format(Some(&preview_api_key), "preview_api_key")?;

        self.settings.preview_api_key = Some(preview_api_key);
        self.settings.use_preview_api = true;
        Ok(self.into_optional_steps())
    }

    /// Use the production API secured by the given key
    pub fn use_secured_production_api(
        mut self,
        secured_production_api_key: impl Into<String>,
    ) -> Result<OptionalSteps> {
        let secured_production_api_key = secured_production_api_key.into();
        validate_api_key_format(
            Some(&secured_production_api_key),
            "secured_production_api_key",
        )?;

        self.settings.secured_production_api_key = Some(secured_production_api_key);
        self.settings.use_secured_production_api = true;
        Ok(self.into_optional_steps())
    }

    fn into_optional_steps(self) -> OptionalSteps {
        OptionalSteps {
            settings: self.settings,
        }
    }
}

impl OptionalSteps {
    /// Wait for updated content, e.g. when acting on a webhook
    pub fn wait_for_loading_new_content(mut self) -> Self {
        self.settings.wait_for_loading_new_content = true;
        self
    }

    /// Enable retry logic for HTTP requests
    pub fn enable_resilience_logic(mut self) -> Self {
        self.settings.enable_resilience_logic = true;
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retry_attempts(mut self, attempts: i32) -> Result<Self> {
        validate_max_retry_attempts(attempts)?;
        self.settings.max_retry_attempts = attempts;
        Ok(self)
    }

    /// Replace the endpoint of the chosen API mode
    ///
    /// In preview mode this sets the preview endpoint, otherwise the
    /// production endpoint.
    pub fn with_custom_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_endpoint(Some(&endpoint), "custom_endpoint")?;

        if self.settings.use_preview_api {
            self.settings.preview_endpoint = endpoint;
        } else {
            self.settings.production_endpoint = endpoint;
        }
        Ok(self)
    }

    /// Validate the assembled settings and produce the options
    pub fn build(self) -> Result<DeliveryOptions> {
        let options = DeliveryOptions::try_from(self.settings)?;
        debug!(
            "Built delivery options for project {} ({:?})",
            options.project_id(),
            options.mode()
        );
        Ok(options)
    }

    /// Settings assembled so far
    pub fn settings(&self) -> &DeliveryOptionsSettings {
        &self.settings
    }
}
