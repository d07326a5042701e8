//! Verification gateway orchestrating validation, delivery and matching

use chrono::{DateTime, Utc};

use crate::domain::entities::{SavedVerification, VerificationInput};
use crate::domain::value_objects::{SendVerificationResult, VerifyResult};
use crate::errors::{DeliveryError, DomainResult};
use crate::services::phone::PhoneValidator;

use super::matcher::CodeMatcher;
use super::registry::ProviderRegistry;
use super::test_mode::TestModePolicy;
use super::traits::VerificationRequest;

/// Message returned when delivery fails.
///
/// The diagnostic form (with the cause) is only handed out in test mode;
/// production callers get the generic form.
pub fn failure_message(phone: &str, cause: &str, test_mode: bool) -> String {
    if test_mode {
        format!("Failed to send verification to user ({}): {}", phone, cause)
    } else {
        format!("Failed to send verification to user {}", phone)
    }
}

/// Issues verification codes and checks submitted ones.
///
/// Holds read-only configuration and shared providers only, so one instance
/// can serve concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct VerificationGateway {
    validator: PhoneValidator,
    registry: ProviderRegistry,
    policy: TestModePolicy,
    matcher: CodeMatcher,
}

impl VerificationGateway {
    /// Create a new verification gateway
    ///
    /// # Arguments
    ///
    /// * `validator` - Phone validator applied to every send
    /// * `registry` - Providers per channel
    /// * `policy` - Test-mode policy snapshot
    /// * `matcher` - Code matcher used by `verify`
    pub fn new(
        validator: PhoneValidator,
        registry: ProviderRegistry,
        policy: TestModePolicy,
        matcher: CodeMatcher,
    ) -> Self {
        if policy.is_test_mode() {
            if policy.default_code().is_some() {
                tracing::warn!(
                    event = "test_mode_active",
                    "Test mode active: codes are not delivered, the default code is accepted"
                );
            } else {
                tracing::warn!(
                    event = "test_mode_without_default_code",
                    "Test mode active without a default code, codes will be delivered"
                );
            }
        }

        Self {
            validator,
            registry,
            policy,
            matcher,
        }
    }

    pub fn policy(&self) -> &TestModePolicy {
        &self.policy
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Issue a verification code to `input.phone` over `input.channel`.
    ///
    /// # Returns
    ///
    /// * `Ok(SendVerificationResult)` - success with the issued code, or a failure
    ///   with a message for an invalid phone or a delivery error
    /// * `Err(DomainError::UnsupportedChannel)` - no provider is registered for the channel
    pub async fn send_verification(
        &self,
        input: &VerificationInput,
    ) -> DomainResult<SendVerificationResult> {
        tracing::info!(
            phone = %input.phone,
            channel = %input.channel,
            event = "verification_requested",
            "Sending verification code"
        );

        let phone = match self.validator.validate(&input.phone) {
            Ok(phone) => phone,
            Err(error) => {
                tracing::info!(
                    phone = %input.phone,
                    reason = %error,
                    event = "phone_rejected",
                    "Rejected phone number"
                );
                return Ok(SendVerificationResult::failure(error.to_string()));
            }
        };

        let provider = self.registry.resolve(input.channel)?;

        if let Some(code) = self.policy.override_code() {
            tracing::warn!(
                phone = %phone,
                channel = %input.channel,
                event = "delivery_bypassed",
                "Test mode active, issuing default code without delivery"
            );
            return Ok(SendVerificationResult::success(code));
        }

        let request = VerificationRequest::new(phone.clone(), input.channel, input.code.clone());
        let outcome = provider.send(&request).await.and_then(|code| {
            if code.is_empty() {
                Err(DeliveryError::new(provider.name(), "provider returned an empty code"))
            } else {
                Ok(code)
            }
        });

        match outcome {
            Ok(code) => {
                tracing::info!(
                    phone = %phone,
                    channel = %input.channel,
                    provider = provider.name(),
                    event = "verification_sent",
                    "Verification code sent"
                );
                Ok(SendVerificationResult::success(code))
            }
            Err(error) => {
                let cause = error.to_string();
                tracing::error!(
                    phone = %phone,
                    channel = %input.channel,
                    provider = provider.name(),
                    error = %cause,
                    event = "delivery_failed",
                    "{}",
                    failure_message(phone.as_str(), &cause, true)
                );
                Ok(SendVerificationResult::failure(failure_message(
                    phone.as_str(),
                    &cause,
                    self.policy.is_test_mode(),
                )))
            }
        }
    }

    /// Check a submitted code against the caller's saved verification
    pub fn verify(&self, input: &VerificationInput, saved: &SavedVerification) -> VerifyResult {
        self.verify_at(input, saved, Utc::now())
    }

    /// [`verify`](Self::verify) with an explicit clock
    pub fn verify_at(
        &self,
        input: &VerificationInput,
        saved: &SavedVerification,
        now: DateTime<Utc>,
    ) -> VerifyResult {
        let result = self.matcher.check(
            input.code.as_deref(),
            saved,
            self.policy.override_code(),
            now,
        );

        if !result.is_success() {
            tracing::debug!(
                phone = %input.phone,
                reason = result.message().unwrap_or_default(),
                event = "verification_rejected",
                "Verification code rejected"
            );
        }

        result
    }
}
