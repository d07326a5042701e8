//! SMS Service Module
//!
//! This module provides the SMS back ends used to deliver verification codes.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **Twilio Support**: Production SMS via Twilio API
//! - **AWS SNS Support**: Alternative production SMS provider
//! - **Security**: Phone number masking in logs

use std::sync::Arc;

use vp_shared::config::{Environment, SmsConfig, SmsProviderKind};

use crate::InfrastructureError;

pub mod mock_sms;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// AWS SNS SMS service (feature-gated)
#[cfg(feature = "aws-sns")]
pub mod aws_sns;

// Re-export commonly used types
pub use mock_sms::MockSmsService;
pub use sms_service::{
    check_message_length, is_valid_phone_number, mask_phone_number, to_carrier_e164, SmsService,
    MAX_MESSAGE_LENGTH,
};

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(feature = "aws-sns")]
pub use aws_sns::{AwsSnsConfig, AwsSnsSmsService};

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Outside production a back end that cannot be initialized is replaced by
/// the mock service with a warning. In production the error is returned.
///
/// # Arguments
///
/// * `config` - SMS configuration containing provider settings
/// * `environment` - Deployment stage deciding whether the mock fallback is allowed
pub async fn create_sms_service(
    config: &SmsConfig,
    environment: Environment,
) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    let created: Result<Arc<dyn SmsService>, InfrastructureError> = match config.provider {
        SmsProviderKind::Mock => {
            if environment.is_production() {
                tracing::warn!("Mock SMS service selected in production, codes are not delivered");
            }
            Ok(Arc::new(MockSmsService::new()))
        }
        SmsProviderKind::Twilio => create_twilio(config),
        SmsProviderKind::AwsSns => create_aws_sns(config).await,
    };

    match created {
        Ok(service) => {
            tracing::info!(provider = service.provider_name(), "SMS service ready");
            Ok(service)
        }
        Err(e) if !environment.is_production() => {
            tracing::error!(
                provider = %config.provider,
                error = %e,
                "Failed to initialize SMS service"
            );
            tracing::warn!("Falling back to mock SMS service");
            Ok(Arc::new(MockSmsService::new()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(feature = "twilio-sms")]
fn create_twilio(config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    let twilio_config = TwilioConfig::from_sms_config(config)?;
    Ok(Arc::new(TwilioSmsService::new(twilio_config)?))
}

#[cfg(not(feature = "twilio-sms"))]
fn create_twilio(_config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    Err(InfrastructureError::Config(
        "SMS provider 'twilio' requires the twilio-sms feature".to_string(),
    ))
}

#[cfg(feature = "aws-sns")]
async fn create_aws_sns(config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    let aws_config = AwsSnsConfig::from_sms_config(config)?;
    Ok(Arc::new(AwsSnsSmsService::new(aws_config).await?))
}

#[cfg(not(feature = "aws-sns"))]
async fn create_aws_sns(_config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    Err(InfrastructureError::Config(
        "SMS provider 'aws-sns' requires the aws-sns feature".to_string(),
    ))
}
