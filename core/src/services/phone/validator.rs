//! Phone validator producing canonical E.164 numbers

use once_cell::sync::Lazy;
use regex::Regex;
use vp_shared::config::VerificationConfig;
use vp_shared::phone::{has_valid_charset, international_prefix_to_plus, strip_formatting};

use crate::domain::value_objects::NormalizedPhone;
use crate::errors::{DomainError, DomainResult, PhoneValidationError};

/// E.164: `+`, a country code that does not start with 0, 7-15 digits in total
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").unwrap()
});

/// Chinese mobile numbers start with 13-19, followed by 9 digits
static CHINA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1[3-9]\d{9}$").unwrap()
});

/// Australian mobile numbers start with 4, followed by 8 digits
static AUSTRALIA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^4\d{8}$").unwrap()
});

/// Russian subscriber numbers are 10 digits after +7
static RUSSIA_SUBSCRIBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{10}$").unwrap()
});

/// Bare local Russian numbers are mobile numbers: 10 digits starting with 9
static RUSSIA_LOCAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^9\d{9}$").unwrap()
});

/// North American numbers: 10 digits, area code never starts with 0 or 1
static NANP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[2-9]\d{9}$").unwrap()
});

/// Countries with dedicated validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryCode {
    China,         // +86
    Australia,     // +61
    Russia,        // +7
    NorthAmerica,  // +1
}

impl CountryCode {
    /// Parse an ISO 3166 alpha-2 code (`CN`, `AU`, `RU`, `US`, `CA`)
    pub fn from_iso(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "CN" => Some(CountryCode::China),
            "AU" => Some(CountryCode::Australia),
            "RU" | "KZ" => Some(CountryCode::Russia),
            "US" | "CA" => Some(CountryCode::NorthAmerica),
            _ => None,
        }
    }

    /// Identify the country of an E.164 number, returning the local part
    pub fn from_phone(phone: &str) -> Option<(Self, &str)> {
        if let Some(local) = phone.strip_prefix("+86") {
            Some((CountryCode::China, local))
        } else if let Some(local) = phone.strip_prefix("+61") {
            Some((CountryCode::Australia, local))
        } else if let Some(local) = phone.strip_prefix("+7") {
            Some((CountryCode::Russia, local))
        } else if let Some(local) = phone.strip_prefix("+1") {
            Some((CountryCode::NorthAmerica, local))
        } else {
            None
        }
    }

    /// Get the dialing prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::China => "+86",
            CountryCode::Australia => "+61",
            CountryCode::Russia => "+7",
            CountryCode::NorthAmerica => "+1",
        }
    }

    /// Expand a local number (digits only) into E.164
    fn expand_local(&self, digits: &str) -> Result<String, PhoneValidationError> {
        let local = match self {
            CountryCode::China => Some(digits),
            CountryCode::Australia => Some(strip_trunk_zero(digits)),
            CountryCode::Russia => match digits.len() {
                11 if digits.starts_with('8') => Some(&digits[1..]),
                10 if RUSSIA_LOCAL_MOBILE_REGEX.is_match(digits) => Some(digits),
                _ => None,
            },
            CountryCode::NorthAmerica => match digits.len() {
                11 if digits.starts_with('1') => Some(&digits[1..]),
                10 => Some(digits),
                _ => None,
            },
        };

        match local {
            Some(local) if self.accepts_local(local) => Ok(format!("{}{}", self.as_str(), local)),
            _ => Err(self.rule_violation()),
        }
    }

    fn accepts_local(&self, local: &str) -> bool {
        match self {
            CountryCode::China => CHINA_MOBILE_REGEX.is_match(local),
            CountryCode::Australia => AUSTRALIA_MOBILE_REGEX.is_match(local),
            CountryCode::Russia => RUSSIA_SUBSCRIBER_REGEX.is_match(local),
            CountryCode::NorthAmerica => NANP_REGEX.is_match(local),
        }
    }

    fn rule_violation(&self) -> PhoneValidationError {
        let (country, rule) = match self {
            CountryCode::China => ("Chinese", "Must be 11 digits starting with 13-19 after +86"),
            CountryCode::Australia => ("Australian", "Must be 9 digits starting with 4 after +61"),
            CountryCode::Russia => ("Russian", "Must be 10 digits after +7"),
            CountryCode::NorthAmerica => (
                "North American",
                "Must be 10 digits after +1 with an area code not starting with 0 or 1",
            ),
        };
        PhoneValidationError::InvalidForCountry {
            country: country.to_string(),
            rule: rule.to_string(),
        }
    }
}

fn strip_trunk_zero(digits: &str) -> &str {
    if digits.len() == 10 && digits.starts_with('0') {
        &digits[1..]
    } else {
        digits
    }
}

/// Normalizes and validates raw phone input.
///
/// No side effects; the returned [`NormalizedPhone`] is what the gateway
/// hands to providers and writes into log messages.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator {
    default_country: Option<CountryCode>,
}

impl PhoneValidator {
    /// Validator that requires an explicit country code
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that expands local numbers with `country`
    pub fn with_default_country(country: CountryCode) -> Self {
        Self {
            default_country: Some(country),
        }
    }

    /// Build from configuration; an unknown default country is a configuration error
    pub fn from_config(config: &VerificationConfig) -> DomainResult<Self> {
        match config.default_country.as_deref() {
            None => Ok(Self::new()),
            Some(iso) => CountryCode::from_iso(iso)
                .map(Self::with_default_country)
                .ok_or_else(|| DomainError::Configuration {
                    message: format!("Unsupported default phone country: {}", iso),
                }),
        }
    }

    pub fn default_country(&self) -> Option<CountryCode> {
        self.default_country
    }

    /// Validate `raw` and return its canonical E.164 form
    pub fn validate(&self, raw: &str) -> Result<NormalizedPhone, PhoneValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PhoneValidationError::Empty);
        }
        if !has_valid_charset(trimmed) {
            return Err(PhoneValidationError::InvalidCharacters);
        }

        let cleaned = international_prefix_to_plus(&strip_formatting(trimmed));
        let e164 = if cleaned.starts_with('+') {
            cleaned
        } else {
            match self.default_country {
                Some(country) => country.expand_local(&cleaned)?,
                None => return Err(PhoneValidationError::MissingCountryCode),
            }
        };

        if !E164_REGEX.is_match(&e164) {
            return Err(PhoneValidationError::InvalidFormat);
        }

        if let Some((country, local)) = CountryCode::from_phone(&e164) {
            if !country.accepts_local(local) {
                return Err(country.rule_violation());
            }
        }

        Ok(NormalizedPhone::new_unchecked(e164))
    }
}
