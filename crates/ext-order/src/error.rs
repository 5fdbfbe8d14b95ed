use std::path::PathBuf;

use crate::extension::Tag;

/// Errors that can occur while loading or ordering extensions.
///
/// Every resolution failure is terminal for the current call: nothing is
/// partially ordered and nothing is retried. The variants carry the
/// offending tags and canonical identities so callers can render their own
/// diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more needed tags have no provider.
    #[error(
        "extensions providing the following tags must be configured: {}",
        .tags.join(", ")
    )]
    MissingDependency { tags: Vec<Tag> },

    /// A tag is both provided and excluded.
    #[error(
        "{} require(s) that the '{tag}' tag not exist, but it is provided by {provided_by}",
        .excluded_by.join(", ")
    )]
    ExclusionConflict {
        tag: Tag,
        excluded_by: Vec<String>,
        provided_by: String,
    },

    /// The dependency graph contains a cycle.
    #[error("circular dependency found: {}", .members.join(", "))]
    CircularDependency { members: Vec<String> },

    /// A resolved node could not be mapped back to a registered extension.
    #[error("internal invariant violated: {detail}")]
    InternalInvariantViolation { detail: String },

    /// An extension provides no tags, so it has no canonical identity.
    #[error("extension registered at position {position} provides no tags")]
    MissingIdentity { position: usize },

    /// Two extensions share the same canonical identity.
    #[error("extension identity '{id}' is registered more than once (positions {positions:?})")]
    DuplicateIdentity { id: String, positions: Vec<usize> },

    /// A required tag is provided by more than one extension.
    #[error(
        "tag '{tag}' is provided by more than one extension: {}",
        .providers.join(", ")
    )]
    AmbiguousProvider { tag: Tag, providers: Vec<String> },

    /// A tag in a manifest is malformed.
    #[error("invalid tag '{tag}' in extension #{position}: {reason}")]
    InvalidTag {
        tag: Tag,
        position: usize,
        reason: String,
    },

    /// Failed to parse an extension manifest.
    #[error("failed to parse extension manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Extension manifest file not found at the expected path.
    #[error("extension manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// I/O error reading a manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        Self::InternalInvariantViolation {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
