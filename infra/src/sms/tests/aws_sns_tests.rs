//! Unit tests for AWS SNS SMS service

use vp_shared::config::{SmsConfig, SmsProviderKind};

use crate::sms::{AwsSnsConfig, AwsSnsSmsService, SmsService};
use crate::InfrastructureError;

fn sns_sms_config() -> SmsConfig {
    SmsConfig {
        provider: SmsProviderKind::AwsSns,
        api_key: "AKIDEXAMPLE".to_string(),
        api_secret: "secret".to_string(),
        from_number: "Veriphone".to_string(),
        region: "ap-southeast-2".to_string(),
        ..SmsConfig::default()
    }
}

#[test]
fn test_config_from_sms_config() {
    let config = AwsSnsConfig::from_sms_config(&sns_sms_config()).unwrap();
    assert_eq!(config.access_key_id, "AKIDEXAMPLE");
    assert_eq!(config.secret_access_key, "secret");
    assert_eq!(config.region, "ap-southeast-2");
    assert_eq!(config.sender_id.as_deref(), Some("Veriphone"));
    assert_eq!(config.sms_type, "Transactional");
}

#[test]
fn test_phone_from_number_is_not_a_sender_id() {
    let config = AwsSnsConfig::from_sms_config(&SmsConfig {
        from_number: "+15551234567".to_string(),
        ..sns_sms_config()
    })
    .unwrap();
    assert_eq!(config.sender_id, None);
}

#[test]
fn test_default_credential_chain_allowed() {
    let config = AwsSnsConfig::from_sms_config(&SmsConfig {
        api_key: String::new(),
        api_secret: String::new(),
        ..sns_sms_config()
    })
    .unwrap();
    assert!(config.access_key_id.is_empty());
}

#[test]
fn test_half_configured_credentials_rejected() {
    let result = AwsSnsConfig::from_sms_config(&SmsConfig {
        api_secret: String::new(),
        ..sns_sms_config()
    });
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_service_creation_and_local_validation() {
    let config = AwsSnsConfig::from_sms_config(&sns_sms_config()).unwrap();
    let service = AwsSnsSmsService::new(config).await.unwrap();
    assert_eq!(service.provider_name(), "AWS SNS");

    // Fails before any request is made
    assert!(service.send_sms("0412345678", "hello").await.is_err());
}

#[tokio::test]
#[ignore = "Requires actual AWS credentials"]
async fn test_actual_sms_sending() {
    let config = crate::load_config().expect("configuration from env");
    let sns = AwsSnsConfig::from_sms_config(&config.sms).expect("AWS SNS config from env");
    let service = AwsSnsSmsService::new(sns).await.expect("AWS SNS service");

    let result = service.send_verification_code("+14155552671", "123456").await;

    assert!(result.is_ok());
    println!("Message ID: {}", result.unwrap());
}
