//! Canonical phone number produced by the phone validator.

use serde::Serialize;
use std::fmt;

/// Phone number in E.164 form (`+` followed by 7-15 digits).
///
/// Only the phone validator constructs it, so every value that reaches
/// a delivery provider has already been normalized and checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub(crate) fn new_unchecked(phone: String) -> Self {
        Self(phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
