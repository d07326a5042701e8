//! SMS Service Interface
//!
//! Defines the trait for SMS back ends that deliver verification codes.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use vp_shared::config::sms::DEFAULT_MESSAGE_TEMPLATE;

use crate::InfrastructureError;

pub use vp_shared::phone::mask_phone_number;

/// Longest message body accepted by the carriers we talk to
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - AWS SNS
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code rendered into `template`
    ///
    /// Every `{code}` placeholder in the template is replaced with `code`.
    async fn send_verification_code_with(
        &self,
        phone_number: &str,
        code: &str,
        template: &str,
    ) -> Result<String, InfrastructureError> {
        let message = template.replace("{code}", code);
        self.send_sms(phone_number, &message).await
    }

    /// Send a verification code with the default message template
    async fn send_verification_code(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        self.send_verification_code_with(phone_number, code, DEFAULT_MESSAGE_TEMPLATE)
            .await
    }

    /// Get the service provider name
    ///
    /// Returns the name of the SMS service provider (e.g., "Twilio", "AWS SNS", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Check for a `+` followed by 7 to 15 digits
///
/// ```
/// use vp_infra::sms::is_valid_phone_number;
/// assert!(is_valid_phone_number("+15551234567"));
/// assert!(!is_valid_phone_number("15551234567"));
/// ```
pub fn is_valid_phone_number(phone: &str) -> bool {
    match phone.strip_prefix('+') {
        Some(digits) => {
            (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Parse a number with the phonenumber crate and format it as E.164
///
/// Real carriers reject numbers without a country code, so no default
/// country is assumed here.
pub fn to_carrier_e164(phone: &str) -> Result<String, InfrastructureError> {
    if !phone.starts_with('+') {
        return Err(InfrastructureError::Sms(
            "Phone number must be in E.164 format (e.g., +15551234567)".to_string(),
        ));
    }

    phone
        .parse::<PhoneNumber>()
        .map(|parsed| parsed.format().mode(Mode::E164).to_string())
        .map_err(|e| InfrastructureError::Sms(format!("Invalid phone number format: {}", e)))
}

/// Reject message bodies longer than [`MAX_MESSAGE_LENGTH`]
pub fn check_message_length(message: &str) -> Result<(), InfrastructureError> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(InfrastructureError::Sms(format!(
            "Message exceeds maximum length of {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(())
}
