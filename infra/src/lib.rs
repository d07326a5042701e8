//! # Infrastructure Layer
//!
//! This crate wires the Veriphone verification gateway to the outside world.
//! It provides concrete SMS back ends, the provider adapter that turns an SMS
//! back end into a verification provider, configuration loading and the
//! tracing subscriber setup.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **SMS**: SMS service integrations (mock, Twilio, AWS SNS)
//! - **Providers**: `VerificationProvider` adapters and registry assembly
//! - **Telemetry**: `tracing-subscriber` initialization
//!
//! ## Features
//!
//! - `twilio-sms`: Enable Twilio SMS service (default)
//! - `aws-sns`: Enable AWS SNS SMS service (default)

// Re-export core types for convenience
pub use vp_core::errors::*;

/// SMS service module - External SMS providers
pub mod sms;

/// Verification provider adapters and registry assembly
pub mod providers;

/// Logging setup
pub mod telemetry;

use vp_core::{CodeMatcher, PhoneValidator, TestModePolicy, VerificationGateway};
use vp_shared::config::AppConfig;

pub use providers::{build_provider_registry, SmsVerificationProvider};

/// Initialize the verification gateway from the process environment
///
/// This function:
/// - Loads `.env` and the application configuration
/// - Creates the configured SMS back end
/// - Registers verification providers per channel
/// - Builds the test-mode policy, phone validator and code matcher
pub async fn initialize() -> Result<VerificationGateway, InfrastructureError> {
    tracing::info!("Initializing verification gateway...");

    let config = load_config()?;
    let gateway = build_gateway(&config).await?;

    tracing::info!(
        environment = %config.environment,
        channels = ?gateway.registry().channels(),
        test_mode = gateway.policy().is_test_mode(),
        "Verification gateway initialized successfully"
    );

    Ok(gateway)
}

/// Build a gateway from an already loaded configuration snapshot
pub async fn build_gateway(config: &AppConfig) -> Result<VerificationGateway, InfrastructureError> {
    let validator = PhoneValidator::from_config(&config.verification)
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;
    let registry = build_provider_registry(config).await?;
    let policy = TestModePolicy::from_config(&config.verification, config.environment);
    let matcher = CodeMatcher::new(config.verification.max_attempts);

    Ok(VerificationGateway::new(validator, registry, policy, matcher))
}

/// Load application configuration from environment
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    Ok(AppConfig::from_env())
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// SMS provider did not answer in time
    #[error("SMS request timed out after {0} seconds")]
    Timeout(u64),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
