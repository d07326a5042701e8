//! Phone number validation and normalization
//!
//! Raw user input is cleaned up, expanded with a default country when it has
//! no country code, and checked against E.164 plus per-country mobile rules.

mod validator;

pub use validator::{CountryCode, PhoneValidator};
