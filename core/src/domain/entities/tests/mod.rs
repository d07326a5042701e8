//! Unit tests for domain entities

mod verification_tests;
