//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Deployment stage detection and logging configuration
//! - `sms` - SMS back end selection and credentials
//! - `verification` - Test mode, default code and code matching limits

pub mod environment;
pub mod sms;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use sms::{SmsConfig, SmsProviderKind};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations.
///
/// Built once at startup and handed to the gateway as a read-only snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Deployment stage
    pub environment: Environment,

    /// Verification flow settings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// SMS delivery settings
    #[serde(default)]
    pub sms: SmsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            verification: VerificationConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Configuration for local development: mock SMS, test mode allowed
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            verification: VerificationConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        Self {
            environment,
            verification: VerificationConfig::from_lookup(&lookup),
            sms: SmsConfig::from_lookup(&lookup),
            logging: LoggingConfig::from_lookup(environment, &lookup),
        }
    }
}
