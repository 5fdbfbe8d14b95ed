//! Declarative extension sets loaded from TOML.
//!
//! # Example TOML
//!
//! ```toml
//! [resolver]
//! providers = "strict"
//!
//! [[extension]]
//! provides = ["config"]
//! first = true
//!
//! [[extension]]
//! provides = ["cache", "kv"]
//! needs = ["config"]
//! excludes = ["cache"]
//!
//! [[extension]]
//! provides = ["report"]
//! uses = ["metrics"]
//! last = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::extension::Extension;

/// A manifest document: resolver settings plus extensions in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionSet {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default, rename = "extension")]
    pub extensions: Vec<Extension>,
}

impl ExtensionSet {
    /// Parse and validate a manifest from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let set: Self = toml::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    /// Read and parse a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_toml(&content)?;
        tracing::debug!(
            ?path,
            extensions = set.extensions.len(),
            "Loaded extension manifest"
        );
        Ok(set)
    }

    /// Every tag must be a non-empty string without surrounding whitespace.
    fn validate(&self) -> Result<()> {
        for (position, extension) in self.extensions.iter().enumerate() {
            let declared = extension
                .provides
                .iter()
                .chain(&extension.needs)
                .chain(&extension.uses)
                .chain(&extension.excludes);
            for tag in declared {
                let reason = if tag.is_empty() {
                    "tags must not be empty"
                } else if tag.trim() != tag {
                    "tags must not have leading or trailing whitespace"
                } else {
                    continue;
                };
                return Err(Error::InvalidTag {
                    tag: tag.clone(),
                    position,
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }
}
