//! Domain entities exchanged with callers of the gateway.

pub mod verification;

#[cfg(test)]
mod tests;

pub use verification::{ChannelType, SavedVerification, VerificationInput};
