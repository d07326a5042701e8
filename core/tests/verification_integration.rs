//! Integration tests for the issue-then-verify flow

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use tokio::sync::RwLock;

    use vp_core::{
        generate_secure_code, ChannelType, CodeMatcher, DeliveryError, PhoneValidator,
        ProviderRegistry, SavedVerification, TestModePolicy, VerificationGateway,
        VerificationInput, VerificationProvider, VerificationRequest,
    };
    use vp_shared::config::{AppConfig, Environment};

    // Provider generating its own codes, like a real SMS back end
    struct GeneratingProvider {
        sent: AtomicUsize,
    }

    impl GeneratingProvider {
        fn new() -> Self {
            Self {
                sent: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VerificationProvider for GeneratingProvider {
        async fn send(&self, request: &VerificationRequest) -> Result<String, DeliveryError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(request.code.clone().unwrap_or_else(|| generate_secure_code(6)))
        }

        fn name(&self) -> &str {
            "generating"
        }
    }

    // Caller-side persistence of issued codes
    #[derive(Default)]
    struct SavedStore {
        records: RwLock<HashMap<String, SavedVerification>>,
    }

    impl SavedStore {
        async fn save(&self, record: SavedVerification) {
            self.records.write().await.insert(record.phone.clone(), record);
        }

        async fn record_attempt(&self, phone: &str) -> Option<SavedVerification> {
            let mut records = self.records.write().await;
            let record = records.get_mut(phone)?;
            let snapshot = record.clone();
            record.attempts += 1;
            Some(snapshot)
        }
    }

    fn build_gateway(config: &AppConfig, provider: Arc<GeneratingProvider>) -> VerificationGateway {
        let registry = ProviderRegistry::new()
            .with(ChannelType::Sms, provider.clone())
            .with(ChannelType::Voice, provider);
        VerificationGateway::new(
            PhoneValidator::from_config(&config.verification).unwrap(),
            registry,
            TestModePolicy::from_config(&config.verification, config.environment),
            CodeMatcher::new(config.verification.max_attempts),
        )
    }

    fn production_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        config
    }

    #[tokio::test]
    async fn test_issue_persist_and_verify() {
        let config = production_config();
        let provider = Arc::new(GeneratingProvider::new());
        let gateway = build_gateway(&config, provider.clone());
        let store = SavedStore::default();

        let input = VerificationInput::new("+44 20 7123 4567", ChannelType::Voice);
        let sent = gateway.send_verification(&input).await.unwrap();
        assert!(sent.is_success());

        let code = sent.code().unwrap().to_string();
        assert_eq!(code.len(), 6);
        store
            .save(
                SavedVerification::new("+442071234567", code.clone()).expiring_at(
                    Utc::now() + Duration::minutes(config.verification.code_ttl_minutes),
                ),
            )
            .await;

        let saved = store.record_attempt("+442071234567").await.unwrap();
        let result = gateway.verify(&input.with_code(code), &saved);
        assert!(result.is_success());
        assert_eq!(provider.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_attempts_exhaust_saved_code() {
        let config = production_config();
        let gateway = build_gateway(&config, Arc::new(GeneratingProvider::new()));
        let store = SavedStore::default();

        let input = VerificationInput::new("+61412345678", ChannelType::Sms).with_code("135790");
        let sent = gateway.send_verification(&input).await.unwrap();
        assert_eq!(sent.code(), Some("135790"));
        store.save(SavedVerification::new("+61412345678", "135790")).await;

        let guess = input.clone().with_code("000001");
        for _ in 0..config.verification.max_attempts {
            let saved = store.record_attempt("+61412345678").await.unwrap();
            assert!(!gateway.verify(&guess, &saved).is_success());
        }

        // Correct code after the limit is rejected
        let saved = store.record_attempt("+61412345678").await.unwrap();
        let result = gateway.verify(&input, &saved);
        assert_eq!(result.message(), Some("Maximum verification attempts exceeded"));
    }

    #[tokio::test]
    async fn test_test_mode_scenario() {
        let mut config = AppConfig::development();
        config.verification = config.verification.with_default_code("000000");
        let provider = Arc::new(GeneratingProvider::new());
        let gateway = build_gateway(&config, provider.clone());

        let input = VerificationInput::new("+79123456789", ChannelType::Sms);
        let sent = gateway.send_verification(&input).await.unwrap();
        assert_eq!(sent.code(), Some("000000"));
        assert_eq!(provider.sent.load(Ordering::SeqCst), 0);

        let saved = SavedVerification::new("+79123456789", "999999");
        assert!(gateway.verify(&input.with_code("000000"), &saved).is_success());
    }

    #[tokio::test]
    async fn test_concurrent_sends_share_one_gateway() {
        let provider = Arc::new(GeneratingProvider::new());
        let gateway = Arc::new(build_gateway(&production_config(), provider.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let gateway = Arc::clone(&gateway);
                tokio::spawn(async move {
                    let phone = format!("+1555123450{}", i);
                    gateway
                        .send_verification(&VerificationInput::new(phone, ChannelType::Sms))
                        .await
                })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert!(result.is_success());
        }
        assert_eq!(provider.sent.load(Ordering::SeqCst), 8);
    }

    #[tokio::test]
    async fn test_unknown_default_country_is_rejected_at_startup() {
        let mut config = production_config();
        config.verification = config.verification.with_default_country("ZZ");
        assert!(PhoneValidator::from_config(&config.verification).is_err());
    }
}
