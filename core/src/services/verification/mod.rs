//! Verification gateway for phone-based authentication
//!
//! This module provides the issue/verify workflow:
//! - Provider capability and per-channel provider registry
//! - Test-mode policy gated by configuration and deployment stage
//! - Secure code generation and constant-time code matching
//! - The gateway orchestrating validation, delivery and logging

mod code;
mod gateway;
mod matcher;
mod registry;
mod test_mode;
mod traits;

#[cfg(test)]
mod tests;

pub use code::generate_secure_code;
pub use gateway::{failure_message, VerificationGateway};
pub use matcher::{
    CodeMatcher, CODE_EXPIRED, CODE_MISMATCH, CODE_REQUIRED, MAX_ATTEMPTS_EXCEEDED,
};
pub use registry::ProviderRegistry;
pub use test_mode::TestModePolicy;
pub use traits::{VerificationProvider, VerificationRequest};
