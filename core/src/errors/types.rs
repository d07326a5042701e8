//! Error types for phone validation and code delivery

use thiserror::Error;

/// Why a raw phone string was rejected.
///
/// The `Display` text is user-facing: it becomes the failure message of
/// `send_verification`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidationError {
    #[error("Phone number is required")]
    Empty,

    #[error("Phone number contains invalid characters")]
    InvalidCharacters,

    #[error("Phone number must include country code (e.g., +1 for the US)")]
    MissingCountryCode,

    #[error("Invalid phone number format. Must be in E.164 format (e.g., +15551234567)")]
    InvalidFormat,

    #[error("Invalid {country} phone number. {rule}")]
    InvalidForCountry { country: String, rule: String },
}

/// Failure reported by a delivery provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{provider} delivery failed: {message}")]
pub struct DeliveryError {
    /// Provider that attempted the delivery
    pub provider: String,
    /// Provider-specific failure detail
    pub message: String,
}

impl DeliveryError {
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
