//! SMS delivery configuration

use serde::{Deserialize, Serialize};

/// Message sent when no template is configured
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Your verification code is: {code}. Do not share it with anyone.";

/// Which SMS back end delivers codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmsProviderKind {
    /// Logs messages instead of sending them
    Mock,
    /// Twilio Programmable Messaging
    Twilio,
    /// AWS Simple Notification Service
    AwsSns,
}

impl std::str::FromStr for SmsProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(SmsProviderKind::Mock),
            "twilio" => Ok(SmsProviderKind::Twilio),
            "aws-sns" | "aws_sns" | "sns" => Ok(SmsProviderKind::AwsSns),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

impl std::fmt::Display for SmsProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsProviderKind::Mock => write!(f, "mock"),
            SmsProviderKind::Twilio => write!(f, "twilio"),
            SmsProviderKind::AwsSns => write!(f, "aws-sns"),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProviderKind,
    /// API credentials (Twilio account SID / AWS access key id)
    #[serde(default)]
    pub api_key: String,
    /// API secret (Twilio auth token / AWS secret access key)
    #[serde(default)]
    pub api_secret: String,
    /// Sender phone number or sender id
    pub from_number: String,
    /// AWS region for SNS
    #[serde(default = "default_region")]
    pub region: String,
    /// Message body; `{code}` is replaced with the verification code
    #[serde(default = "default_message_template")]
    pub message_template: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProviderKind::Mock,
            api_key: String::new(),
            api_secret: String::new(),
            from_number: "+1234567890".to_string(),
            region: default_region(),
            message_template: default_message_template(),
        }
    }
}

impl SmsConfig {
    /// Create from an arbitrary variable lookup.
    ///
    /// An unknown `SMS_PROVIDER` value falls back to the mock back end.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            provider: lookup("SMS_PROVIDER")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.provider),
            api_key: lookup("SMS_API_KEY").unwrap_or_default(),
            api_secret: lookup("SMS_API_SECRET").unwrap_or_default(),
            from_number: lookup("SMS_FROM_NUMBER").unwrap_or(defaults.from_number),
            region: lookup("AWS_REGION").unwrap_or(defaults.region),
            message_template: lookup("SMS_MESSAGE_TEMPLATE")
                .filter(|t| t.contains("{code}"))
                .unwrap_or(defaults.message_template),
        }
    }
}

fn default_region() -> String {
    String::from("us-east-1")
}

fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("Twilio".parse::<SmsProviderKind>().unwrap(), SmsProviderKind::Twilio);
        assert_eq!("aws-sns".parse::<SmsProviderKind>().unwrap(), SmsProviderKind::AwsSns);
        assert_eq!("sns".parse::<SmsProviderKind>().unwrap(), SmsProviderKind::AwsSns);
        assert!("carrier-pigeon".parse::<SmsProviderKind>().is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = SmsConfig::from_lookup(lookup_from(&[
            ("SMS_PROVIDER", "twilio"),
            ("SMS_API_KEY", "ACtest"),
            ("SMS_API_SECRET", "secret"),
            ("SMS_FROM_NUMBER", "+15550001111"),
        ]));
        assert_eq!(config.provider, SmsProviderKind::Twilio);
        assert_eq!(config.api_key, "ACtest");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.from_number, "+15550001111");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_unknown_provider_falls_back_to_mock() {
        let config = SmsConfig::from_lookup(lookup_from(&[("SMS_PROVIDER", "unknown")]));
        assert_eq!(config.provider, SmsProviderKind::Mock);
    }

    #[test]
    fn test_template_without_placeholder_is_ignored() {
        let config = SmsConfig::from_lookup(lookup_from(&[("SMS_MESSAGE_TEMPLATE", "Hello")]));
        assert_eq!(config.message_template, DEFAULT_MESSAGE_TEMPLATE);

        let config =
            SmsConfig::from_lookup(lookup_from(&[("SMS_MESSAGE_TEMPLATE", "Code {code}")]));
        assert_eq!(config.message_template, "Code {code}");
    }
}
