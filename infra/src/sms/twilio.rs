//! Twilio SMS Service Implementation
//!
//! Sends verification messages through the Twilio Programmable Messaging API.
//! Each send is a single request bounded by a timeout; failures are reported
//! to the caller as they are.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info};
use twilio::{Client, OutboundMessage};
use vp_shared::config::SmsConfig;

use crate::{
    sms::sms_service::{check_message_length, mask_phone_number, to_carrier_e164, SmsService},
    InfrastructureError,
};

/// Default timeout for a Twilio API request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Build from the generic SMS configuration
    ///
    /// `api_key` carries the account SID and `api_secret` the auth token.
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "SMS_API_KEY (Twilio account SID) not set".to_string(),
            ));
        }
        if config.api_secret.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "SMS_API_SECRET (Twilio auth token) not set".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "SMS_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.api_key.clone(),
            auth_token: config.api_secret.clone(),
            from_number: config.from_number.clone(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            provider = "twilio",
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        let to = to_carrier_e164(phone_number)?;
        check_message_length(message)?;

        let masked = mask_phone_number(&to);
        info!(
            provider = "twilio",
            phone = %masked,
            message_length = message.len(),
            "Sending SMS via Twilio"
        );

        let outbound = OutboundMessage::new(&self.config.from_number, &to, message);
        let timeout = Duration::from_secs(self.config.request_timeout_secs);

        match tokio::time::timeout(timeout, self.client.send_message(outbound)).await {
            Ok(Ok(response)) => {
                info!(
                    provider = "twilio",
                    phone = %masked,
                    message_id = %response.sid,
                    "SMS sent successfully"
                );
                Ok(response.sid)
            }
            Ok(Err(e)) => {
                error!(provider = "twilio", phone = %masked, error = %e, "Failed to send SMS");
                Err(InfrastructureError::Sms(format!("Twilio request failed: {}", e)))
            }
            Err(_) => {
                error!(provider = "twilio", phone = %masked, "Twilio request timed out");
                Err(InfrastructureError::Timeout(self.config.request_timeout_secs))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
