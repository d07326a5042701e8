//! Phone number string utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Characters a user may type into a phone field
static PHONE_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9 ().\-]+$").unwrap()
});

/// Remove formatting characters, keeping digits and `+`
pub fn strip_formatting(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check that a raw phone string only uses digits, a leading `+` and
/// the usual separators (space, dash, dot, parentheses)
pub fn has_valid_charset(phone: &str) -> bool {
    PHONE_CHARSET_REGEX.is_match(phone)
}

/// Rewrite an international `00` dialing prefix to `+`
pub fn international_prefix_to_plus(phone: &str) -> String {
    match phone.strip_prefix("00") {
        Some(rest) if !rest.is_empty() => format!("+{}", rest),
        _ => phone.to_string(),
    }
}

/// Mask a phone number for logging, keeping the last 4 digits
///
/// ```
/// use vp_shared::phone::mask_phone_number;
/// assert_eq!(mask_phone_number("+1234567890"), "+******7890");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let last_digits: String = phone.chars().skip(len - 4).collect();
    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(len - 5), last_digits)
    } else {
        format!("{}{}", "*".repeat(len - 4), last_digits)
    }
}
