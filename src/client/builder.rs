//! Staged Delivery client builder

use super::client::DeliveryClient;
use super::resilience::{DefaultResiliencePolicyProvider, ResiliencePolicyProvider};
use crate::config::{DeliveryOptions, DeliveryOptionsBuilder};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Entry point for building a [`DeliveryClient`]
///
/// Every path first produces validated [`DeliveryOptions`]; the optional
/// steps then allow overriding the HTTP client and the resilience policy.
#[derive(Debug)]
pub struct DeliveryClientBuilder;

impl DeliveryClientBuilder {
    /// Production API for the given project, default settings
    pub fn with_project_id(project_id: impl AsRef<str>) -> Result<DeliveryClientOptionalSteps> {
        Self::with_options(|builder| {
            builder
                .with_project_id(project_id)?
                .use_production_api()
                .build()
        })
    }

    /// Production API for the given project, default settings
    pub fn with_project_uuid(project_id: Uuid) -> Result<DeliveryClientOptionalSteps> {
        Self::with_options(|builder| {
            builder
                .with_project_uuid(project_id)?
                .use_production_api()
                .build()
        })
    }

    /// Options produced by a function driving the staged options builder
    pub fn with_options<F>(build_options: F) -> Result<DeliveryClientOptionalSteps>
    where
        F: FnOnce(DeliveryOptionsBuilder) -> Result<DeliveryOptions>,
    {
        let options = build_options(DeliveryOptionsBuilder::new())?;
        Ok(Self::with_delivery_options(options))
    }

    /// Options that were already built
    pub fn with_delivery_options(options: DeliveryOptions) -> DeliveryClientOptionalSteps {
        DeliveryClientOptionalSteps {
            options,
            http_client: None,
            resilience_policy_provider: None,
        }
    }

    /// Build a client for the production API of a project with no overrides
    pub fn build_with_project_id_only(project_id: impl AsRef<str>) -> Result<DeliveryClient> {
        Self::with_project_id(project_id)?.build()
    }

    /// Build a client for the production API of a project with no overrides
    pub fn build_with_project_uuid_only(project_id: Uuid) -> Result<DeliveryClient> {
        Self::with_project_uuid(project_id)?.build()
    }

    /// Build a client from options produced by `build_options` with no overrides
    pub fn build_with_options_only<F>(build_options: F) -> Result<DeliveryClient>
    where
        F: FnOnce(DeliveryOptionsBuilder) -> Result<DeliveryOptions>,
    {
        Self::with_options(build_options)?.build()
    }
}

/// Optional overrides of a [`DeliveryClient`] under construction
#[derive(Debug)]
pub struct DeliveryClientOptionalSteps {
    options: DeliveryOptions,
    http_client: Option<reqwest::Client>,
    resilience_policy_provider: Option<Arc<dyn ResiliencePolicyProvider>>,
}

impl DeliveryClientOptionalSteps {
    /// Use a preconfigured HTTP client
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Use a custom resilience policy provider
    pub fn with_resilience_policy_provider(
        mut self,
        provider: Arc<dyn ResiliencePolicyProvider>,
    ) -> Self {
        self.resilience_policy_provider = Some(provider);
        self
    }

    /// Options the client will use
    pub fn options(&self) -> &DeliveryOptions {
        &self.options
    }

    /// Assemble the client
    pub fn build(self) -> Result<DeliveryClient> {
        let http_client = match self.http_client {
            Some(http_client) => http_client,
            None => {
                debug!("Using default HTTP client");
                reqwest::Client::builder().build()?
            }
        };

        let resilience_policy_provider = self.resilience_policy_provider.unwrap_or_else(|| {
            Arc::new(DefaultResiliencePolicyProvider::new(&self.options))
        });

        Ok(DeliveryClient::from_parts(
            self.options,
            http_client,
            resilience_policy_provider,
        ))
    }
}
