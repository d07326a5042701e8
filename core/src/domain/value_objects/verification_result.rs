//! Outcomes of the send and verify operations.

use serde::Serialize;

/// Result of issuing a verification code.
///
/// A successful result always carries a non-empty `code` (the value the
/// caller persists); a failed one always carries a non-empty `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendVerificationResult {
    #[serde(rename = "isSuccess")]
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl SendVerificationResult {
    /// Successful issuance of `code`
    pub fn success(code: impl Into<String>) -> Self {
        Self {
            is_success: true,
            code: Some(code.into()),
            message: None,
        }
    }

    /// Failed issuance with a human-readable reason
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Issued code, present only on success
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Failure reason, present only on failure
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Result of checking a submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResult {
    #[serde(rename = "isSuccess")]
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl VerifyResult {
    /// The submitted code matched
    pub fn success() -> Self {
        Self {
            is_success: true,
            message: None,
        }
    }

    /// The submitted code did not match
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Mismatch explanation, present only on failure
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
