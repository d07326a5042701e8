//! Channel to provider mapping

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::ChannelType;
use crate::errors::{DomainError, DomainResult};

use super::traits::VerificationProvider;

/// Selects the provider responsible for a channel.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ChannelType, Arc<dyn VerificationProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` for `channel`, replacing any previous one
    pub fn register(&mut self, channel: ChannelType, provider: Arc<dyn VerificationProvider>) {
        let name = provider.name().to_string();
        if let Some(previous) = self.providers.insert(channel, provider) {
            tracing::warn!(
                channel = %channel,
                previous = previous.name(),
                provider = %name,
                "Replacing verification provider"
            );
        } else {
            tracing::debug!(
                channel = %channel,
                provider = %name,
                "Registered verification provider"
            );
        }
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, channel: ChannelType, provider: Arc<dyn VerificationProvider>) -> Self {
        self.register(channel, provider);
        self
    }

    /// Provider for `channel`, or `UnsupportedChannel`
    pub fn resolve(&self, channel: ChannelType) -> DomainResult<Arc<dyn VerificationProvider>> {
        self.providers
            .get(&channel)
            .cloned()
            .ok_or(DomainError::UnsupportedChannel { channel })
    }

    pub fn supports(&self, channel: ChannelType) -> bool {
        self.providers.contains_key(&channel)
    }

    /// Registered channels in declaration order
    pub fn channels(&self) -> Vec<ChannelType> {
        ChannelType::ALL
            .into_iter()
            .filter(|channel| self.supports(*channel))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for channel in self.channels() {
            if let Some(provider) = self.providers.get(&channel) {
                map.entry(&channel, &provider.name());
            }
        }
        map.finish()
    }
}
