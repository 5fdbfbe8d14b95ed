//! The registered unit: declared tags, dependencies and position hints.

use serde::{Deserialize, Serialize};

/// An opaque capability name.
pub type Tag = String;

/// A registered participant in the ordering.
///
/// Every attribute defaults to empty/`false`, so a manifest entry only has
/// to name what it sets:
///
/// ```toml
/// [[extension]]
/// provides = ["cache", "kv"]
/// needs = ["config"]
/// uses = ["metrics"]
/// excludes = ["cache"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Extension {
    /// Tags this extension exposes. The first one is its canonical identity.
    #[serde(default)]
    pub provides: Vec<Tag>,
    /// Tags that must be provided by some extension.
    #[serde(default)]
    pub needs: Vec<Tag>,
    /// Tags that are ordered before this extension when present.
    #[serde(default)]
    pub uses: Vec<Tag>,
    /// Tags that no extension may provide while this one is registered.
    #[serde(default)]
    pub excludes: Vec<Tag>,
    /// Run before every extension not marked `first`.
    #[serde(default)]
    pub first: bool,
    /// Run after every extension not marked `last`.
    #[serde(default)]
    pub last: bool,
}

fn tags<I, S>(items: I) -> Vec<Tag>
where
    I: IntoIterator<Item = S>,
    S: Into<Tag>,
{
    items.into_iter().map(Into::into).collect()
}

impl Extension {
    /// Create an extension providing `provides`, with no other declarations.
    pub fn providing<I, S>(provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Tag>,
    {
        Self {
            provides: tags(provides),
            ..Self::default()
        }
    }

    /// Add hard dependencies.
    pub fn needing<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Tag>,
    {
        self.needs.extend(tags(needs));
        self
    }

    /// Add soft dependencies.
    pub fn using<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Tag>,
    {
        self.uses.extend(tags(uses));
        self
    }

    /// Add exclusions.
    pub fn excluding<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Tag>,
    {
        self.excludes.extend(tags(excludes));
        self
    }

    pub fn run_first(mut self) -> Self {
        self.first = true;
        self
    }

    pub fn run_last(mut self) -> Self {
        self.last = true;
        self
    }

    /// The canonical identity: the first provided tag.
    pub fn id(&self) -> Option<&str> {
        self.provides.first().map(String::as_str)
    }

    /// Whether this extension provides `tag`.
    pub fn provides_tag(&self, tag: &str) -> bool {
        self.provides.iter().any(|t| t == tag)
    }

    /// Whether the `last` flag takes effect.
    ///
    /// `first` wins when both flags are set.
    pub fn is_last(&self) -> bool {
        self.last && !self.first
    }
}
