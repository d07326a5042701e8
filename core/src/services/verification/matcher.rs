//! Submitted code matching

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;

use crate::domain::entities::SavedVerification;
use crate::domain::value_objects::VerifyResult;

pub const CODE_REQUIRED: &str = "Verification code is required";
pub const CODE_EXPIRED: &str = "Verification code expired";
pub const MAX_ATTEMPTS_EXCEEDED: &str = "Maximum verification attempts exceeded";
pub const CODE_MISMATCH: &str = "Verification code does not match";

/// Checks a submitted code against a saved verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMatcher {
    max_attempts: u32,
}

impl CodeMatcher {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Match `submitted` at `now`.
    ///
    /// An override code short-circuits before expiry and attempt limits,
    /// so the saved record is ignored entirely when it matches.
    pub fn check(
        &self,
        submitted: Option<&str>,
        saved: &SavedVerification,
        override_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> VerifyResult {
        let submitted = match submitted {
            Some(code) if !code.trim().is_empty() => code,
            _ => return VerifyResult::failure(CODE_REQUIRED),
        };

        if let Some(override_code) = override_code {
            if codes_equal(submitted, override_code) {
                return VerifyResult::success();
            }
        }

        if saved.is_expired_at(now) {
            return VerifyResult::failure(CODE_EXPIRED);
        }

        if saved.attempts >= self.max_attempts {
            return VerifyResult::failure(MAX_ATTEMPTS_EXCEEDED);
        }

        if codes_equal(submitted, &saved.code) {
            VerifyResult::success()
        } else {
            VerifyResult::failure(CODE_MISMATCH)
        }
    }
}

/// Constant-time comparison of two codes
fn codes_equal(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
