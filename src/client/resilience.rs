//! Resilience policy providers

use crate::config::DeliveryOptions;
use std::fmt::Debug;

/// Retry settings handed to whatever executes requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Whether failed requests are retried at all
    pub enabled: bool,
    /// Maximum number of retries after the first attempt
    pub max_retry_attempts: u32,
}

impl RetryPolicy {
    /// Whether another retry is allowed after `retries_so_far` retries
    pub fn allows_retry(&self, retries_so_far: u32) -> bool {
        self.enabled && retries_so_far < self.max_retry_attempts
    }
}

/// Source of the retry policy used by a [`crate::DeliveryClient`]
pub trait ResiliencePolicyProvider: Send + Sync + Debug {
    fn retry_policy(&self) -> RetryPolicy;
}

/// Policy provider derived from the delivery options
#[derive(Debug, Clone)]
pub struct DefaultResiliencePolicyProvider {
    policy: RetryPolicy,
}

impl DefaultResiliencePolicyProvider {
    pub fn new(options: &DeliveryOptions) -> Self {
        Self {
            policy: RetryPolicy {
                enabled: options.enable_resilience_logic(),
                max_retry_attempts: options.max_retry_attempts(),
            },
        }
    }
}

impl ResiliencePolicyProvider for DefaultResiliencePolicyProvider {
    fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }
}
