//! Verification request and saved-verification entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery mechanism for a verification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Text message
    Sms,
    /// Automated voice call reading the code out
    Voice,
    /// Messenger application
    Messenger,
}

impl ChannelType {
    /// All supported channels
    pub const ALL: [ChannelType; 3] =
        [ChannelType::Sms, ChannelType::Voice, ChannelType::Messenger];

    /// Lowercase channel name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Sms => "sms",
            ChannelType::Voice => "voice",
            ChannelType::Messenger => "messenger",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sms" | "text" => Ok(ChannelType::Sms),
            "voice" | "call" => Ok(ChannelType::Voice),
            "messenger" => Ok(ChannelType::Messenger),
            _ => Err(format!("Unknown channel type: {}", s)),
        }
    }
}

/// Caller-supplied verification request.
///
/// On send, `code` is an optional caller-chosen code that providers may honour.
/// On verify, `code` is the code the user submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInput {
    /// Raw phone number as entered by the user
    pub phone: String,

    /// Channel used to deliver the code
    #[serde(rename = "type")]
    pub channel: ChannelType,

    /// Verification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl VerificationInput {
    /// Creates a send request without a caller-chosen code
    pub fn new(phone: impl Into<String>, channel: ChannelType) -> Self {
        Self {
            phone: phone.into(),
            channel,
            code: None,
        }
    }

    /// Attaches a code (caller-chosen on send, user-submitted on verify)
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Previously issued verification, persisted by the caller.
///
/// The gateway only reads it; `expires_at` and `attempts` are interpreted
/// by the code matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedVerification {
    /// Phone the code was issued to
    pub phone: String,

    /// Issued code
    pub code: String,

    /// Moment after which the code no longer matches
    #[serde(default, rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Verification attempts already made against this code
    #[serde(default)]
    pub attempts: u32,
}

impl SavedVerification {
    /// Creates a saved verification with no expiry and no attempts
    pub fn new(phone: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            code: code.into(),
            expires_at: None,
            attempts: 0,
        }
    }

    /// Sets the expiry moment
    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Sets the attempts already made
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Checks whether the code has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| now > expires_at)
    }
}
