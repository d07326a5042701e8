//! AWS SNS SMS Service Implementation
//!
//! Sends verification messages through AWS Simple Notification Service.
//! Each send is a single `Publish` call bounded by a timeout.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::{config::Region, types::MessageAttributeValue, Client as SnsClient};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use vp_shared::config::SmsConfig;

use crate::{
    sms::sms_service::{check_message_length, mask_phone_number, to_carrier_e164, SmsService},
    InfrastructureError,
};

/// Default timeout for an SNS request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// AWS SNS SMS service configuration
#[derive(Debug, Clone)]
pub struct AwsSnsConfig {
    /// AWS Access Key ID; empty means the default credential chain
    pub access_key_id: String,
    /// AWS Secret Access Key
    pub secret_access_key: String,
    /// AWS Region (e.g., "us-east-1")
    pub region: String,
    /// SMS sender ID (optional, may not be supported in all regions)
    pub sender_id: Option<String>,
    /// SMS type: "Transactional" or "Promotional"
    pub sms_type: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl AwsSnsConfig {
    /// Build from the generic SMS configuration
    ///
    /// `api_key`/`api_secret` are the access key pair. A `from_number` that is
    /// not a phone number is used as the alphanumeric sender ID.
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let has_key = !config.api_key.trim().is_empty();
        let has_secret = !config.api_secret.trim().is_empty();
        if has_key != has_secret {
            return Err(InfrastructureError::Config(
                "SMS_API_KEY and SMS_API_SECRET must be set together for AWS SNS".to_string(),
            ));
        }
        if config.region.trim().is_empty() {
            return Err(InfrastructureError::Config("AWS_REGION must not be empty".to_string()));
        }

        let sender_id = Some(config.from_number.trim())
            .filter(|from| !from.is_empty() && !from.starts_with('+'))
            .map(str::to_string);

        Ok(Self {
            access_key_id: config.api_key.clone(),
            secret_access_key: config.api_secret.clone(),
            region: config.region.clone(),
            sender_id,
            sms_type: "Transactional".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }
}

/// AWS SNS SMS service implementation
pub struct AwsSnsSmsService {
    client: SnsClient,
    config: AwsSnsConfig,
}

impl AwsSnsSmsService {
    /// Create a new AWS SNS SMS service
    pub async fn new(config: AwsSnsConfig) -> Result<Self, InfrastructureError> {
        let region = Region::new(config.region.clone());
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if !config.access_key_id.is_empty() {
            let credentials = aws_credential_types::Credentials::new(
                &config.access_key_id,
                &config.secret_access_key,
                None,
                None,
                "veriphone_sms",
            );
            loader = loader.credentials_provider(credentials);
        }

        let client = SnsClient::new(&loader.load().await);

        info!(
            provider = "aws-sns",
            region = %config.region,
            sender_id = ?config.sender_id,
            "AWS SNS SMS service initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AwsSnsConfig {
        &self.config
    }

    /// Create SMS attributes for AWS SNS
    fn create_sms_attributes(
        &self,
    ) -> Result<HashMap<String, MessageAttributeValue>, InfrastructureError> {
        let mut attributes = HashMap::new();

        attributes.insert(
            "AWS.SNS.SMS.SMSType".to_string(),
            string_attribute(&self.config.sms_type)?,
        );

        if let Some(ref sender_id) = self.config.sender_id {
            attributes.insert("AWS.SNS.SMS.SenderID".to_string(), string_attribute(sender_id)?);
        }

        Ok(attributes)
    }
}

fn string_attribute(value: &str) -> Result<MessageAttributeValue, InfrastructureError> {
    MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()
        .map_err(|e| InfrastructureError::Sms(format!("Invalid SNS message attribute: {}", e)))
}

#[async_trait]
impl SmsService for AwsSnsSmsService {
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        let to = to_carrier_e164(phone_number)?;
        check_message_length(message)?;

        let masked = mask_phone_number(&to);
        info!(
            provider = "aws-sns",
            phone = %masked,
            message_length = message.len(),
            "Sending SMS via AWS SNS"
        );

        let request = self
            .client
            .publish()
            .phone_number(&to)
            .message(message)
            .set_message_attributes(Some(self.create_sms_attributes()?))
            .send();
        let timeout = Duration::from_secs(self.config.request_timeout_secs);

        match tokio::time::timeout(timeout, request).await {
            Ok(Ok(response)) => {
                let message_id = response.message_id().unwrap_or("unknown").to_string();
                info!(
                    provider = "aws-sns",
                    phone = %masked,
                    message_id = %message_id,
                    "SMS sent successfully"
                );
                Ok(message_id)
            }
            Ok(Err(e)) => {
                error!(provider = "aws-sns", phone = %masked, error = %e, "Failed to send SMS");
                Err(InfrastructureError::Sms(format!("AWS SNS request failed: {}", e)))
            }
            Err(_) => {
                error!(provider = "aws-sns", phone = %masked, "AWS SNS request timed out");
                Err(InfrastructureError::Timeout(self.config.request_timeout_secs))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "AWS SNS"
    }

    async fn is_available(&self) -> bool {
        // Lightweight call that verifies credentials and connectivity
        match self.client.get_sms_attributes().send().await {
            Ok(_) => {
                debug!("AWS SNS health check passed");
                true
            }
            Err(e) => {
                warn!("AWS SNS health check failed: {}", e);
                false
            }
        }
    }
}
