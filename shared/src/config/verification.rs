//! Verification flow configuration

use serde::{Deserialize, Serialize};

/// Default length of generated verification codes
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of verification attempts allowed per code
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default lifetime of an issued code in minutes
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 5;

/// Settings for issuing and checking verification codes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Test-mode toggle. Defaults to `true` when not configured;
    /// the deployment environment still has to allow it.
    #[serde(default = "default_test_mode")]
    pub test_mode: bool,

    /// Code issued and accepted while test mode is active
    #[serde(default)]
    pub default_code: Option<String>,

    /// ISO country (`CN`, `AU`, `RU`, `US`) assumed for numbers without `+`
    #[serde(default)]
    pub default_country: Option<String>,

    /// Length of generated numeric codes
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Attempts allowed before a saved code stops matching
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Lifetime of an issued code, used by callers to stamp `expires_at`
    #[serde(default = "default_code_ttl_minutes")]
    pub code_ttl_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            test_mode: default_test_mode(),
            default_code: None,
            default_country: None,
            code_length: default_code_length(),
            max_attempts: default_max_attempts(),
            code_ttl_minutes: default_code_ttl_minutes(),
        }
    }
}

impl VerificationConfig {
    /// Create from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            test_mode: lookup("PHONE_AUTH_TEST_MODE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or_else(default_test_mode),
            default_code: non_empty("DEFAULT_AUTH_CODE"),
            default_country: non_empty("PHONE_DEFAULT_COUNTRY"),
            code_length: lookup("VERIFICATION_CODE_LENGTH")
                .and_then(|v| v.parse().ok())
                .filter(|len| *len > 0)
                .unwrap_or_else(default_code_length),
            max_attempts: lookup("VERIFICATION_MAX_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_attempts),
            code_ttl_minutes: lookup("VERIFICATION_CODE_TTL_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_code_ttl_minutes),
        }
    }

    /// Set the test-mode toggle
    pub fn with_test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    /// Set the default test code
    pub fn with_default_code(mut self, code: impl Into<String>) -> Self {
        self.default_code = Some(code.into());
        self
    }

    /// Set the country assumed for local numbers
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }
}

/// Parse a boolean flag the way operators tend to write them
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_test_mode() -> bool {
    true
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_code_ttl_minutes() -> i64 {
    DEFAULT_CODE_TTL_MINUTES
}
