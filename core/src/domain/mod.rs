//! Domain layer containing verification entities and result value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{ChannelType, SavedVerification, VerificationInput};
pub use value_objects::{NormalizedPhone, SendVerificationResult, VerifyResult};
