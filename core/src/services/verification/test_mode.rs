//! Test-mode policy

use vp_shared::config::{Environment, VerificationConfig};

/// Decides whether delivery is bypassed in favour of a fixed default code.
///
/// Test mode requires both the configuration flag and a deployment stage
/// that allows it (development or test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestModePolicy {
    active: bool,
    default_code: Option<String>,
}

impl TestModePolicy {
    pub fn new(flag: bool, environment: Environment, default_code: Option<String>) -> Self {
        Self {
            active: flag && environment.allows_test_mode(),
            default_code: default_code.filter(|code| !code.trim().is_empty()),
        }
    }

    /// Policy from a configuration snapshot
    pub fn from_config(config: &VerificationConfig, environment: Environment) -> Self {
        Self::new(config.test_mode, environment, config.default_code.clone())
    }

    /// Policy that never bypasses anything
    pub fn disabled() -> Self {
        Self {
            active: false,
            default_code: None,
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.active
    }

    /// Configured default code, whether or not test mode is active
    pub fn default_code(&self) -> Option<&str> {
        self.default_code.as_deref()
    }

    /// Default code, only while test mode is active
    pub fn override_code(&self) -> Option<&str> {
        if self.active {
            self.default_code()
        } else {
            None
        }
    }
}
