//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{DeliveryError, PhoneValidationError};

use thiserror::Error;

use crate::domain::entities::ChannelType;

/// Errors that escape the gateway as `Err` rather than as a failure result.
///
/// Soft outcomes (bad phone, delivery failure, code mismatch) are reported
/// through `SendVerificationResult` / `VerifyResult` instead.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No provider is registered for the requested channel
    #[error("No verification provider registered for channel '{channel}'")]
    UnsupportedChannel { channel: ChannelType },

    /// The gateway was assembled from inconsistent settings
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
