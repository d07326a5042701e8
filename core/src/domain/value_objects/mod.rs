//! Value objects representing immutable outcomes of gateway calls.

pub mod phone_number;
pub mod verification_result;

pub use phone_number::NormalizedPhone;
pub use verification_result::{SendVerificationResult, VerifyResult};
