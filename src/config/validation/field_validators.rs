//! Single-field validators
//!
//! Each function checks one argument and fails with the error kind describing
//! the first problem found. Successful checks return the parsed value.

use crate::utils::error::{DeliveryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use uuid::Uuid;

// Three dot-separated base64url segments
static API_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$")
        .expect("Invalid API key regex")
});

/// Validate a project identifier given as a string
///
/// Absent and empty identifiers are reported as missing, anything that does
/// not parse as a UUID as malformed, and the nil UUID as an invalid value.
pub fn validate_project_id(project_id: Option<&str>) -> Result<Uuid> {
    let project_id = match project_id {
        None | Some("") => {
            return Err(DeliveryError::missing(
                "project_id",
                "Kentico Cloud project identifier is not specified",
            ));
        }
        Some(project_id) => project_id,
    };

    let uuid = Uuid::parse_str(project_id).map_err(|_| {
        DeliveryError::invalid_format(
            "project_id",
            format!(
                "'{}' is not a valid project identifier. Haven't you accidentally passed \
                 an API key instead of the project identifier?",
                project_id
            ),
        )
    })?;

    validate_project_uuid(uuid)
}

/// Validate a project identifier given as a UUID
pub fn validate_project_uuid(project_id: Uuid) -> Result<Uuid> {
    if project_id.is_nil() {
        return Err(DeliveryError::invalid_value(
            "project_id",
            "Kentico Cloud project identifier cannot be the nil UUID",
        ));
    }

    Ok(project_id)
}

/// Validate the maximum number of retry attempts
pub fn validate_max_retry_attempts(attempts: i32) -> Result<u32> {
    u32::try_from(attempts).map_err(|_| {
        DeliveryError::invalid_value(
            "max_retry_attempts",
            format!(
                "Number of maximum retry attempts can't be less than zero, got {}",
                attempts
            ),
        )
    })
}

/// Validate that an API key has the `segment.segment.segment` shape
pub fn validate_api_key_format(api_key: Option<&str>, field: &'static str) -> Result<()> {
    let api_key =
        api_key.ok_or_else(|| DeliveryError::missing(field, format!("{} is not specified", field)))?;

    if api_key.is_empty() {
        return Err(DeliveryError::invalid_format(
            field,
            format!("{} is empty", field),
        ));
    }

    if !API_KEY_PATTERN.is_match(api_key) {
        return Err(DeliveryError::invalid_format(
            field,
            format!("{} has invalid format", field),
        ));
    }

    Ok(())
}

/// Validate an endpoint URL
///
/// Parsing as an absolute URL and checking the scheme are separate steps, so
/// a value that does not parse never reaches the scheme check.
pub fn validate_endpoint(endpoint: Option<&str>, field: &'static str) -> Result<Url> {
    let endpoint = match endpoint {
        None | Some("") => {
            return Err(DeliveryError::missing(
                field,
                format!("{} is not specified", field),
            ));
        }
        Some(endpoint) => endpoint,
    };

    // Url::parse drops surrounding spaces and inner tabs or newlines, while
    // the raw string is what gets stored and formatted into request URLs
    if endpoint.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(DeliveryError::invalid_format(
            field,
            format!(
                "{:?} is not an absolute URL: contains whitespace or control characters",
                endpoint
            ),
        ));
    }

    let url = Url::parse(endpoint).map_err(|e| {
        DeliveryError::invalid_format(
            field,
            format!("'{}' is not an absolute URL: {}", endpoint, e),
        )
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(DeliveryError::invalid_format(
            field,
            format!("{} must use http:// or https:// scheme, got: {}", field, scheme),
        )),
    }
}
