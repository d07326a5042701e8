//! Unit tests for registry assembly

use std::sync::Arc;

use vp_core::ChannelType;
use vp_shared::config::{AppConfig, Environment};

use crate::providers::{build_provider_registry, registry_for_service};
use crate::sms::MockSmsService;

#[tokio::test]
async fn test_development_registers_all_channels() {
    let registry = build_provider_registry(&AppConfig::development()).await.unwrap();
    assert_eq!(registry.channels(), ChannelType::ALL.to_vec());
    assert_eq!(registry.resolve(ChannelType::Voice).unwrap().name(), "mock-voice");
}

#[tokio::test]
async fn test_production_registers_sms_only() {
    let mut config = AppConfig::default();
    config.environment = Environment::Production;

    let registry = build_provider_registry(&config).await.unwrap();
    assert_eq!(registry.channels(), vec![ChannelType::Sms]);
    assert!(registry.resolve(ChannelType::Messenger).is_err());
}

#[test]
fn test_registry_for_service() {
    let registry =
        registry_for_service(&AppConfig::development(), Arc::new(MockSmsService::silent()));
    assert_eq!(registry.channels(), vec![ChannelType::Sms]);
    assert_eq!(registry.resolve(ChannelType::Sms).unwrap().name(), "Mock");
}
