//! Core Delivery client

use super::resilience::{DefaultResiliencePolicyProvider, ResiliencePolicyProvider, RetryPolicy};
use crate::config::DeliveryOptions;
use crate::utils::error::{DeliveryError, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use tracing::info;

/// Header asking the API to wait until new content is available
pub const WAIT_FOR_LOADING_NEW_CONTENT_HEADER: &str = "x-kc-wait-for-loading-new-content";

/// Header identifying the SDK
pub const SDK_ID_HEADER: &str = "x-kc-sdkid";

/// Value of the SDK identification header
pub const SDK_ID: &str = concat!("crates.io;", env!("CARGO_PKG_NAME"), ";", env!("CARGO_PKG_VERSION"));

/// Client for the Kentico Cloud Delivery API
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    pub(crate) options: Arc<DeliveryOptions>,
    pub(crate) http_client: reqwest::Client,
    pub(crate) resilience_policy_provider: Arc<dyn ResiliencePolicyProvider>,
}

impl DeliveryClient {
    /// Create a client with the default HTTP client and resilience policy
    pub fn new(options: DeliveryOptions) -> Result<Self> {
        let http_client = reqwest::Client::builder().build()?;
        let resilience_policy_provider = Arc::new(DefaultResiliencePolicyProvider::new(&options));

        Ok(Self::from_parts(
            options,
            http_client,
            resilience_policy_provider,
        ))
    }

    pub(crate) fn from_parts(
        options: DeliveryOptions,
        http_client: reqwest::Client,
        resilience_policy_provider: Arc<dyn ResiliencePolicyProvider>,
    ) -> Self {
        info!(
            "DeliveryClient created for project {} ({:?})",
            options.project_id(),
            options.mode()
        );

        Self {
            options: Arc::new(options),
            http_client,
            resilience_policy_provider,
        }
    }

    /// Options the client was built with
    pub fn options(&self) -> &DeliveryOptions {
        &self.options
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Retry policy from the configured provider
    pub fn retry_policy(&self) -> RetryPolicy {
        self.resilience_policy_provider.retry_policy()
    }

    /// Absolute URL of an API path of this project, e.g. `items`
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let project_id = self.options.project_id();

        if path.is_empty() {
            self.options.endpoint_url(&project_id.to_string())
        } else {
            self.options
                .endpoint_url(&format!("{}/{}", project_id, path))
        }
    }

    /// Headers sent with every request
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static(SDK_ID_HEADER),
            HeaderValue::from_static(SDK_ID),
        );

        if let Some(api_key) = self.options.mode().api_key() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                DeliveryError::invalid_format("api_key", "API key is not a valid header value")
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if self.options.wait_for_loading_new_content() {
            headers.insert(
                HeaderName::from_static(WAIT_FOR_LOADING_NEW_CONTENT_HEADER),
                HeaderValue::from_static("true"),
            );
        }

        Ok(headers)
    }
}
