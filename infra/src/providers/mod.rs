//! Verification providers backed by infrastructure services

mod registry;
mod sms_provider;

#[cfg(test)]
mod tests;

pub use registry::{build_provider_registry, registry_for_service};
pub use sms_provider::SmsVerificationProvider;
