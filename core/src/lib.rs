//! # Veriphone Core
//!
//! Core verification flow for the Veriphone gateway.
//! This crate contains the verification data model, the error taxonomy,
//! phone validation, provider selection, the test-mode policy and the
//! gateway that composes them.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
