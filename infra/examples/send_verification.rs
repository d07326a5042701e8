//! Issue and verify a code end to end using the configured back end.
//!
//! Usage: `cargo run -p vp_infra --example send_verification -- +15551234567 [sms|voice|messenger]`

use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use vp_core::{ChannelType, SavedVerification, VerificationInput};
use vp_infra::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = vp_infra::load_config()?;
    init_tracing(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let phone = args.next().context("missing phone number argument")?;
    let channel: ChannelType = match args.next() {
        Some(channel) => channel.parse().map_err(anyhow::Error::msg)?,
        None => ChannelType::Sms,
    };

    let gateway = vp_infra::build_gateway(&config).await?;

    let input = VerificationInput::new(phone.clone(), channel);
    let sent = gateway.send_verification(&input).await?;
    let code = match sent.code() {
        Some(code) => code.to_string(),
        None => bail!("send failed: {}", sent.message().unwrap_or_default()),
    };
    println!("Issued code over {}: {}", channel, code);

    let saved = SavedVerification::new(phone, code.clone())
        .expiring_at(Utc::now() + Duration::minutes(config.verification.code_ttl_minutes));

    let result = gateway.verify(&input.clone().with_code(code), &saved);
    println!("Correct code accepted: {}", result.is_success());

    let result = gateway.verify(&input.with_code("not-the-code"), &saved);
    println!(
        "Wrong code rejected: {} ({})",
        !result.is_success(),
        result.message().unwrap_or_default()
    );

    Ok(())
}
