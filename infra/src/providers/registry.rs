//! Provider registry assembly from configuration

use std::sync::Arc;

use vp_core::{ChannelType, ProviderRegistry};
use vp_shared::config::{AppConfig, SmsProviderKind};

use super::sms_provider::SmsVerificationProvider;
use crate::sms::{create_sms_service, MockSmsService, SmsService};
use crate::InfrastructureError;

/// Build the channel registry for `config`
///
/// SMS is always registered with the configured back end. Voice and
/// messenger have no real back end yet; outside production, with the mock
/// SMS back end selected, they are served by the mock as well.
pub async fn build_provider_registry(
    config: &AppConfig,
) -> Result<ProviderRegistry, InfrastructureError> {
    let service = create_sms_service(&config.sms, config.environment).await?;
    let mut registry = registry_for_service(config, service);

    if !config.environment.is_production() && config.sms.provider == SmsProviderKind::Mock {
        for channel in [ChannelType::Voice, ChannelType::Messenger] {
            let provider = SmsVerificationProvider::new(Arc::new(MockSmsService::new()))
                .with_name(format!("mock-{}", channel))
                .with_code_length(config.verification.code_length)
                .with_template(config.sms.message_template.clone());
            registry.register(channel, Arc::new(provider));
        }
    }

    Ok(registry)
}

/// Registry serving the SMS channel with an existing back end
pub fn registry_for_service(config: &AppConfig, service: Arc<dyn SmsService>) -> ProviderRegistry {
    let provider = SmsVerificationProvider::new(service)
        .with_code_length(config.verification.code_length)
        .with_template(config.sms.message_template.clone());

    ProviderRegistry::new().with(ChannelType::Sms, Arc::new(provider))
}
