//! Delivery provider capability

use async_trait::async_trait;

use crate::domain::entities::ChannelType;
use crate::domain::value_objects::NormalizedPhone;
use crate::errors::DeliveryError;

/// What a provider is asked to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Validated destination
    pub phone: NormalizedPhone,
    /// Channel the provider was selected for
    pub channel: ChannelType,
    /// Caller-chosen code; providers may honour it or issue their own
    pub code: Option<String>,
}

impl VerificationRequest {
    pub fn new(phone: NormalizedPhone, channel: ChannelType, code: Option<String>) -> Self {
        Self {
            phone,
            channel,
            code,
        }
    }
}

/// Trait for verification code delivery over one channel
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Deliver a verification code and return the code that was issued
    async fn send(&self, request: &VerificationRequest) -> Result<String, DeliveryError>;

    /// Provider name for logs and error reports
    fn name(&self) -> &str;
}
