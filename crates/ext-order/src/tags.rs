//! Tag index and constraint validation.
//!
//! The index is built in one pass over the registered extensions and keeps
//! every map in registration order, so the diagnostics produced here are
//! deterministic for a fixed registration sequence.

use indexmap::{IndexMap, IndexSet};

use crate::config::ProviderPolicy;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::graph::NodeIndex;

/// Provided, needed and excluded tags of one registration snapshot.
#[derive(Debug, Clone)]
pub struct TagIndex<'a> {
    ids: Vec<&'a str>,
    /// Tag -> positions of the extensions providing it.
    providers: IndexMap<&'a str, Vec<NodeIndex>>,
    /// Tag -> positions of the extensions excluding it.
    excluders: IndexMap<&'a str, Vec<NodeIndex>>,
    needed: IndexSet<&'a str>,
}

impl<'a> TagIndex<'a> {
    /// Scan `extensions` once.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingIdentity` if an extension provides no tags.
    pub fn build(extensions: &'a [Extension]) -> Result<Self> {
        let mut ids = Vec::with_capacity(extensions.len());
        let mut providers: IndexMap<&str, Vec<NodeIndex>> = IndexMap::new();
        let mut excluders: IndexMap<&str, Vec<NodeIndex>> = IndexMap::new();
        let mut needed = IndexSet::new();

        for (position, extension) in extensions.iter().enumerate() {
            let id = extension
                .id()
                .ok_or(Error::MissingIdentity { position })?;
            ids.push(id);

            for tag in &extension.provides {
                let entry = providers.entry(tag.as_str()).or_default();
                if entry.last() != Some(&position) {
                    entry.push(position);
                }
            }
            for tag in &extension.needs {
                needed.insert(tag.as_str());
            }
            for tag in &extension.excludes {
                let entry = excluders.entry(tag.as_str()).or_default();
                if entry.last() != Some(&position) {
                    entry.push(position);
                }
            }
        }

        Ok(Self {
            ids,
            providers,
            excluders,
            needed,
        })
    }

    /// Canonical identity of the extension at `position`.
    pub fn id(&self, position: NodeIndex) -> &'a str {
        self.ids[position]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every provided tag, in order of first provision.
    pub fn provided(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.providers.keys().copied()
    }

    /// Every needed tag, in order of first mention.
    pub fn needed(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.needed.iter().copied()
    }

    pub fn is_provided(&self, tag: &str) -> bool {
        self.providers.contains_key(tag)
    }

    /// Positions of every extension providing `tag`.
    pub fn providers_of(&self, tag: &str) -> &[NodeIndex] {
        self.providers.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Confirm every needed tag is provided and nothing provided is excluded.
    ///
    /// # Errors
    ///
    /// - `Error::MissingDependency` listing every needed tag without a provider.
    /// - `Error::ExclusionConflict` for the first excluded tag (in exclusion
    ///   order) that some extension provides.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = self
            .needed
            .iter()
            .filter(|tag| !self.is_provided(tag))
            .map(|tag| tag.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingDependency { tags: missing });
        }

        for (tag, excluding) in &self.excluders {
            if let Some(&provider) = self.providers_of(tag).last() {
                return Err(Error::ExclusionConflict {
                    tag: tag.to_string(),
                    excluded_by: excluding.iter().map(|&p| self.id(p).to_string()).collect(),
                    provided_by: self.id(provider).to_string(),
                });
            }
        }

        Ok(())
    }

    /// Reject extensions sharing a canonical identity.
    ///
    /// Only enforced under [`ProviderPolicy::Strict`].
    pub fn check_identities(&self, policy: ProviderPolicy) -> Result<()> {
        if policy == ProviderPolicy::LastWins {
            return Ok(());
        }

        let mut seen: IndexMap<&str, Vec<NodeIndex>> = IndexMap::new();
        for (position, id) in self.ids.iter().enumerate() {
            seen.entry(*id).or_default().push(position);
        }
        match seen.into_iter().find(|(_, positions)| positions.len() > 1) {
            Some((id, positions)) => Err(Error::DuplicateIdentity {
                id: id.to_string(),
                positions,
            }),
            None => Ok(()),
        }
    }

    /// Resolve `tag` to the position of its provider.
    ///
    /// Returns `Ok(None)` when nothing provides the tag.
    ///
    /// # Errors
    ///
    /// Returns `Error::AmbiguousProvider` when several extensions provide the
    /// tag and `policy` is [`ProviderPolicy::Strict`].
    pub fn provider_for(&self, tag: &str, policy: ProviderPolicy) -> Result<Option<NodeIndex>> {
        match (self.providers_of(tag), policy) {
            ([], _) => Ok(None),
            ([only], _) => Ok(Some(*only)),
            (many, ProviderPolicy::LastWins) => Ok(many.last().copied()),
            (many, ProviderPolicy::Strict) => Err(Error::AmbiguousProvider {
                tag: tag.to_string(),
                providers: many.iter().map(|&p| self.id(p).to_string()).collect(),
            }),
        }
    }
}
