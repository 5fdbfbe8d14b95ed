//! Dependency-aware ordering for registered extensions.
//!
//! Extensions declare capability tags they `provide`, tags they `need`
//! (hard dependencies), tags they `use` (soft dependencies), tags they
//! `exclude`, and whether they should run `first` or `last`. The
//! [`Resolver`] turns a registration-ordered slice of [`Extension`]s into a
//! deterministic linear execution order, or fails with a structured
//! [`Error`] describing why the set cannot be linearized.
//!
//! # Example
//!
//! ```
//! use ext_order::{Extension, ExtensionManager};
//!
//! let mut manager = ExtensionManager::new();
//! manager.register(Extension::providing(["a"]));
//! manager.register(Extension::providing(["b"]).needing(["a"]).run_last());
//! manager.register(Extension::providing(["c"]));
//!
//! let ids: Vec<_> = manager
//!     .order()
//!     .unwrap()
//!     .into_iter()
//!     .filter_map(|ext| ext.id())
//!     .collect();
//! assert_eq!(ids, ["a", "c", "b"]);
//! ```

pub mod config;
pub mod error;
pub mod extension;
pub mod graph;
pub mod manager;
pub mod manifest;
pub mod resolver;
pub mod scc;
pub mod sequence;
pub mod tags;

pub use config::{ProviderPolicy, ResolverConfig};
pub use error::{Error, Result};
pub use extension::{Extension, Tag};
pub use graph::{Adjacency, DependencyGraph, NodeIndex};
pub use manager::ExtensionManager;
pub use manifest::ExtensionSet;
pub use resolver::{Resolver, resolve};
pub use scc::{Components, Condensation, strongly_connected};
pub use sequence::stable_order;
pub use tags::TagIndex;
