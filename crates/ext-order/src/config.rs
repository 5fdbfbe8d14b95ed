//! Resolver configuration from a manifest's `[resolver]` table.

use serde::{Deserialize, Serialize};

/// How a tag provided by several extensions is resolved to one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderPolicy {
    /// Fail on shared canonical identities and on ambiguous required tags.
    #[default]
    Strict,
    /// The most recently registered provider of a tag wins.
    LastWins,
}

/// Settings for a [`Resolver`](crate::Resolver).
///
/// ```toml
/// [resolver]
/// providers = "last-wins"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub providers: ProviderPolicy,
}

impl ResolverConfig {
    pub fn with_providers(mut self, providers: ProviderPolicy) -> Self {
        self.providers = providers;
        self
    }
}
