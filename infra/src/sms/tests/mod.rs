//! Unit tests for SMS module

#[cfg(feature = "aws-sns")]
pub mod aws_sns_tests;
