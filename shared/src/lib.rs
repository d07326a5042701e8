//! Shared utilities and common types for the Veriphone gateway
//!
//! This crate provides functionality used by both the core and infra crates:
//! - Configuration snapshots loaded from the environment
//! - Phone string helpers (formatting cleanup, log masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, SmsConfig, SmsProviderKind,
    VerificationConfig,
};
pub use utils::phone;
