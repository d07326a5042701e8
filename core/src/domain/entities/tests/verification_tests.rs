//! Unit tests for verification entities

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::verification::{ChannelType, SavedVerification, VerificationInput};

#[test]
fn test_channel_type_parsing() {
    assert_eq!("SMS".parse::<ChannelType>().unwrap(), ChannelType::Sms);
    assert_eq!("text".parse::<ChannelType>().unwrap(), ChannelType::Sms);
    assert_eq!("call".parse::<ChannelType>().unwrap(), ChannelType::Voice);
    assert_eq!(" Messenger ".parse::<ChannelType>().unwrap(), ChannelType::Messenger);
    assert!("fax".parse::<ChannelType>().is_err());
}

#[test]
fn test_channel_type_display_round_trips() {
    for channel in ChannelType::ALL {
        assert_eq!(channel.to_string().parse::<ChannelType>().unwrap(), channel);
    }
}

#[test]
fn test_verification_input_wire_format() {
    let input: VerificationInput =
        serde_json::from_str(r#"{"phone":"+15551234567","type":"sms"}"#).unwrap();
    assert_eq!(input, VerificationInput::new("+15551234567", ChannelType::Sms));

    let with_code = VerificationInput::new("+15551234567", ChannelType::Voice).with_code("482913");
    let json = serde_json::to_value(&with_code).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "phone": "+15551234567", "type": "voice", "code": "482913" })
    );
}

#[test]
fn test_saved_verification_expiry() {
    let issued = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let saved = SavedVerification::new("+15551234567", "482913")
        .expiring_at(issued + Duration::minutes(5));

    assert!(!saved.is_expired_at(issued));
    assert!(!saved.is_expired_at(issued + Duration::minutes(5)));
    assert!(saved.is_expired_at(issued + Duration::minutes(6)));

    let no_expiry = SavedVerification::new("+15551234567", "482913");
    assert!(!no_expiry.is_expired_at(issued + Duration::days(365)));
}

#[test]
fn test_saved_verification_defaults_from_json() {
    let saved: SavedVerification =
        serde_json::from_str(r#"{"phone":"+15551234567","code":"482913"}"#).unwrap();
    assert_eq!(saved.attempts, 0);
    assert_eq!(saved.expires_at, None);
    assert_eq!(saved, SavedVerification::new("+15551234567", "482913"));
}
