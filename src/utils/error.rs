//! Error handling for the Delivery SDK
//!
//! This module defines the error type shared by the options validator,
//! the staged builders, the configuration loaders and the client factory.

use thiserror::Error;

/// Result type alias for the Delivery SDK
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Main error type for the Delivery SDK
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// A required argument was absent
    #[error("Missing value for {field}: {message}")]
    MissingValue {
        field: &'static str,
        message: String,
    },

    /// A present value does not have the required shape
    #[error("Invalid format of {field}: {message}")]
    InvalidFormat {
        field: &'static str,
        message: String,
    },

    /// A well-formed value violates a semantic bound
    #[error("Invalid value of {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// Mutually exclusive options were combined, or an enabled mode lacks its key
    #[error("Conflicting options: {0}")]
    ConflictingState(String),

    /// An operation was invoked in a stage where it is not legal
    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    /// External configuration source errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error kind, independent of the message payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingValue,
    InvalidFormat,
    InvalidValue,
    ConflictingState,
    ProtocolViolation,
    Config,
    Http,
}

impl DeliveryError {
    pub(crate) fn missing(field: &'static str, message: impl Into<String>) -> Self {
        Self::MissingValue {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::ConflictingState(_) => ErrorKind::ConflictingState,
            Self::ProtocolViolation(_) => ErrorKind::ProtocolViolation,
            Self::Config(_) => ErrorKind::Config,
            Self::Http(_) => ErrorKind::Http,
        }
    }

    /// Name of the offending field, when the error is about a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingValue { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidValue { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Whether the error was raised while validating options
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingValue
                | ErrorKind::InvalidFormat
                | ErrorKind::InvalidValue
                | ErrorKind::ConflictingState
        )
    }

    /// Configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
