//! Configuration loading utilities
//!
//! This module loads [`DeliveryOptionsSettings`] from YAML documents and
//! from `DELIVERY_*` environment variables. Loaded records are not validated
//! here; converting them into [`DeliveryOptions`] does that.

use super::models::*;
use crate::utils::error::{DeliveryError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Section name looked up in YAML documents
pub const DEFAULT_SECTION: &str = "delivery_options";

/// Prefix of the environment variables read by [`DeliveryOptionsSettings::from_env`]
pub const ENV_PREFIX: &str = "DELIVERY_";

impl DeliveryOptionsSettings {
    /// Parse settings from YAML
    ///
    /// The document can either be the settings record itself or hold it
    /// under a top-level `delivery_options` key.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: serde_yaml::Value = parse_yaml(content)?;

        let section = document
            .get(DEFAULT_SECTION)
            .cloned()
            .unwrap_or(document);

        from_value(section)
    }

    /// Parse settings from a named top-level section of a YAML document
    pub fn from_yaml_section(content: &str, section: &str) -> Result<Self> {
        let document: serde_yaml::Value = parse_yaml(content)?;

        let value = document.get(section).cloned().ok_or_else(|| {
            DeliveryError::Config(format!("Configuration section '{}' not found", section))
        })?;

        from_value(value)
    }

    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading delivery options from: {:?}", path);

        let settings = Self::from_yaml_str(&read_file(path)?)?;

        debug!("Delivery options loaded successfully");
        Ok(settings)
    }

    /// Load settings from a named section of a YAML file
    pub fn from_file_section<P: AsRef<Path>>(path: P, section: &str) -> Result<Self> {
        let path = path.as_ref();
        info!(
            "Loading delivery options from section '{}' of: {:?}",
            section, path
        );

        Self::from_yaml_section(&read_file(path)?, section)
    }

    /// Load settings from environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self> {
        info!("Loading delivery options from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        Self::from_env_vars(std::env::vars())
    }

    /// Build settings from `DELIVERY_*` key/value pairs
    ///
    /// Unknown variables are ignored; absent ones keep their defaults.
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();

        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.into();

            match name {
                "PROJECT_ID" => settings.project_id = Some(value),
                "PRODUCTION_ENDPOINT" => settings.production_endpoint = value,
                "PREVIEW_ENDPOINT" => settings.preview_endpoint = value,
                "USE_PREVIEW_API" => settings.use_preview_api = parse_bool(name, &value)?,
                "PREVIEW_API_KEY" => settings.preview_api_key = Some(value),
                "USE_SECURED_PRODUCTION_API" => {
                    settings.use_secured_production_api = parse_bool(name, &value)?
                }
                "SECURED_PRODUCTION_API_KEY" => settings.secured_production_api_key = Some(value),
                "WAIT_FOR_LOADING_NEW_CONTENT" => {
                    settings.wait_for_loading_new_content = parse_bool(name, &value)?
                }
                "ENABLE_RESILIENCE_LOGIC" => {
                    settings.enable_resilience_logic = parse_bool(name, &value)?
                }
                "MAX_RETRY_ATTEMPTS" => {
                    settings.max_retry_attempts = value.trim().parse().map_err(|e| {
                        DeliveryError::Config(format!(
                            "Invalid {}{}: {}",
                            ENV_PREFIX, name, e
                        ))
                    })?
                }
                _ => debug!("Ignoring unknown variable {}{}", ENV_PREFIX, name),
            }
        }

        Ok(settings)
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DeliveryError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })
}

fn parse_yaml(content: &str) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(content)
        .map_err(|e| DeliveryError::Config(format!("Failed to parse config: {}", e)))
}

fn from_value(value: serde_yaml::Value) -> Result<DeliveryOptionsSettings> {
    // An empty document or section means "all defaults"
    if value.is_null() {
        return Ok(DeliveryOptionsSettings::default());
    }

    serde_yaml::from_value(value)
        .map_err(|e| DeliveryError::Config(format!("Invalid delivery options: {}", e)))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(DeliveryError::Config(format!(
            "Invalid {}{}: expected a boolean, got '{}'",
            ENV_PREFIX, name, other
        ))),
    }
}
