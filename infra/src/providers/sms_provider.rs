//! Adapter exposing an SMS back end as a verification provider

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use vp_core::{generate_secure_code, DeliveryError, VerificationProvider, VerificationRequest};
use vp_shared::config::sms::DEFAULT_MESSAGE_TEMPLATE;
use vp_shared::config::verification::DEFAULT_CODE_LENGTH;

use crate::sms::{mask_phone_number, SmsService};

/// Delivers verification codes through an [`SmsService`].
///
/// Uses the caller's code when one is supplied, otherwise generates a
/// numeric code of `code_length` digits.
pub struct SmsVerificationProvider<S: SmsService + ?Sized = dyn SmsService> {
    service: Arc<S>,
    name: String,
    code_length: usize,
    template: String,
}

impl<S: SmsService + ?Sized> SmsVerificationProvider<S> {
    pub fn new(service: Arc<S>) -> Self {
        let name = service.provider_name().to_string();
        Self {
            service,
            name,
            code_length: DEFAULT_CODE_LENGTH,
            template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }

    /// Length of generated codes
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Message template with a `{code}` placeholder
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Name reported in logs and delivery errors
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl<S: SmsService + ?Sized> VerificationProvider for SmsVerificationProvider<S> {
    async fn send(&self, request: &VerificationRequest) -> Result<String, DeliveryError> {
        let code = match request.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => generate_secure_code(self.code_length),
        };

        let message_id = self
            .service
            .send_verification_code_with(request.phone.as_str(), &code, &self.template)
            .await
            .map_err(|e| DeliveryError::new(self.name.as_str(), e.to_string()))?;

        info!(
            provider = %self.name,
            channel = %request.channel,
            phone = %mask_phone_number(request.phone.as_str()),
            message_id = %message_id,
            event = "code_delivered",
            "Verification code delivered"
        );

        Ok(code)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
