//! Services containing the verification domain logic.

pub mod phone;
pub mod verification;

// Re-export commonly used types
pub use phone::{CountryCode, PhoneValidator};
pub use verification::{
    failure_message, generate_secure_code, CodeMatcher, ProviderRegistry, TestModePolicy,
    VerificationGateway, VerificationProvider, VerificationRequest,
};
