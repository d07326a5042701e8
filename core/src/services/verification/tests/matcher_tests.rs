//! Unit tests for code matching

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::SavedVerification;
use crate::services::verification::{
    CodeMatcher, CODE_EXPIRED, CODE_MISMATCH, CODE_REQUIRED, MAX_ATTEMPTS_EXCEEDED,
};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn saved(code: &str) -> SavedVerification {
    SavedVerification::new("+15551234567", code)
}

#[test]
fn test_exact_match() {
    let matcher = CodeMatcher::new(3);
    assert!(matcher.check(Some("482913"), &saved("482913"), None, now()).is_success());

    let result = matcher.check(Some("482914"), &saved("482913"), None, now());
    assert_eq!(result.message(), Some(CODE_MISMATCH));

    // No trimming or prefix matching
    assert!(!matcher.check(Some("48291"), &saved("482913"), None, now()).is_success());
    assert!(!matcher.check(Some(" 482913"), &saved("482913"), None, now()).is_success());
}

#[test]
fn test_missing_code() {
    let matcher = CodeMatcher::new(3);
    for submitted in [None, Some(""), Some("   ")] {
        let result = matcher.check(submitted, &saved("482913"), Some("000000"), now());
        assert_eq!(result.message(), Some(CODE_REQUIRED));
    }
}

#[test]
fn test_override_ignores_saved_record() {
    let matcher = CodeMatcher::new(3);
    let stale = saved("999999")
        .expiring_at(now() - Duration::minutes(10))
        .with_attempts(10);

    assert!(matcher.check(Some("000000"), &stale, Some("000000"), now()).is_success());
}

#[test]
fn test_non_matching_override_falls_through() {
    let matcher = CodeMatcher::new(3);
    assert!(matcher.check(Some("999999"), &saved("999999"), Some("000000"), now()).is_success());
    assert_eq!(
        matcher.check(Some("123456"), &saved("999999"), Some("000000"), now()).message(),
        Some(CODE_MISMATCH)
    );
}

#[test]
fn test_expiry() {
    let matcher = CodeMatcher::new(3);
    let record = saved("482913").expiring_at(now());

    // Still valid at the expiry instant
    assert!(matcher.check(Some("482913"), &record, None, now()).is_success());

    let result = matcher.check(Some("482913"), &record, None, now() + Duration::seconds(1));
    assert_eq!(result.message(), Some(CODE_EXPIRED));
}

#[test]
fn test_attempt_limit() {
    let matcher = CodeMatcher::new(3);
    assert!(matcher
        .check(Some("482913"), &saved("482913").with_attempts(2), None, now())
        .is_success());

    let result = matcher.check(Some("482913"), &saved("482913").with_attempts(3), None, now());
    assert_eq!(result.message(), Some(MAX_ATTEMPTS_EXCEEDED));
}

#[test]
fn test_expiry_checked_before_attempts() {
    let matcher = CodeMatcher::new(3);
    let record = saved("482913")
        .expiring_at(now() - Duration::minutes(1))
        .with_attempts(5);

    assert_eq!(
        matcher.check(Some("482913"), &record, None, now()).message(),
        Some(CODE_EXPIRED)
    );
}
