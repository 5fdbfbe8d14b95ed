//! Dependency graph between registered extensions.
//!
//! Nodes are registration positions, so two extensions can never collide
//! on a node key even when their tags do. Each node also carries the
//! extension's canonical identity for diagnostics.
//!
//! # Example
//!
//! ```
//! use ext_order::{Adjacency, DependencyGraph};
//!
//! let mut graph = DependencyGraph::new();
//! let logging = graph.add_node("logging");
//! let metrics = graph.add_node("metrics");
//! graph.add_edge(metrics, logging);
//!
//! assert_eq!(graph.successors(metrics), &[logging]);
//! assert_eq!(graph.edge_count(), 1);
//! ```

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::config::ProviderPolicy;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::tags::TagIndex;

/// Position of an extension in the registration snapshot.
pub type NodeIndex = usize;

/// Read-only view of a directed graph over dense `0..node_count()` indices.
///
/// Both the dependency graph and its condensation implement this, so the
/// cycle detector and the sequencer work on either.
pub trait Adjacency {
    fn node_count(&self) -> usize;

    /// Direct successors of `node`, in insertion order.
    fn successors(&self, node: usize) -> &[usize];
}

/// Directed graph of "depends on" edges.
///
/// Edges point from dependent to dependency: if A depends on B, the edge
/// is `A -> B` and B must be scheduled first.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    ids: Vec<String>,
    /// Adjacency list: node depends on each value, in insertion order.
    edges: Vec<Vec<NodeIndex>>,
    seen: HashSet<(NodeIndex, NodeIndex)>,
}

impl DependencyGraph {
    /// Create an empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index.
    pub fn add_node(&mut self, id: impl Into<String>) -> NodeIndex {
        self.ids.push(id.into());
        self.edges.push(Vec::new());
        self.ids.len() - 1
    }

    /// Declare that `from` depends on `to`. Repeated edges are kept once.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a node of this graph.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.seen.insert((from, to)) {
            self.edges[from].push(to);
        }
    }

    /// Return the number of edges.
    pub fn edge_count(&self) -> usize {
        self.seen.len()
    }

    /// Canonical identity of `node`.
    pub fn id(&self, node: NodeIndex) -> &str {
        &self.ids[node]
    }

    /// Whether `node` has an edge to itself.
    pub fn has_self_loop(&self, node: NodeIndex) -> bool {
        self.seen.contains(&(node, node))
    }

    /// Get the identities of the direct dependencies of `node`.
    pub fn dependencies_of(&self, node: NodeIndex) -> Vec<&str> {
        self.successors(node).iter().map(|&dep| self.id(dep)).collect()
    }

    /// Build the graph for a validated snapshot.
    ///
    /// For each extension:
    /// - every `needs` tag, and every `uses` tag that something provides,
    ///   becomes an edge to that tag's provider;
    /// - when any extension is marked `first`, every other extension depends
    ///   on all of them;
    /// - an extension marked `last` depends on every extension that is not.
    ///
    /// # Errors
    ///
    /// Returns `Error::AmbiguousProvider` when a required tag has several
    /// providers under [`ProviderPolicy::Strict`].
    pub fn from_extensions(
        extensions: &[Extension],
        index: &TagIndex<'_>,
        policy: ProviderPolicy,
    ) -> Result<Self> {
        let mut graph = Self::new();

        let mut firsts = Vec::new();
        let mut lasts = Vec::new();
        let mut others = Vec::new();
        for (position, extension) in extensions.iter().enumerate() {
            graph.add_node(index.id(position));

            if extension.first && extension.last {
                tracing::warn!(
                    id = index.id(position),
                    "Extension is marked both first and last; treating it as first"
                );
            }
            if extension.first {
                firsts.push(position);
            }
            if extension.is_last() {
                lasts.push(position);
            } else {
                others.push(position);
            }
        }

        for (position, extension) in extensions.iter().enumerate() {
            let requirements: IndexSet<&str> = extension
                .needs
                .iter()
                .chain(extension.uses.iter().filter(|tag| index.is_provided(tag)))
                .map(String::as_str)
                .collect();

            for tag in requirements {
                let provider = index.provider_for(tag, policy)?.ok_or_else(|| {
                    Error::invariant(format!("required tag '{tag}' has no provider"))
                })?;
                graph.add_edge(position, provider);
            }

            if !extension.first {
                for &first in &firsts {
                    graph.add_edge(position, first);
                }
            }

            if extension.is_last() {
                for &other in &others {
                    graph.add_edge(position, other);
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            firsts = firsts.len(),
            lasts = lasts.len(),
            "Built dependency graph"
        );

        Ok(graph)
    }
}

impl Adjacency for DependencyGraph {
    fn node_count(&self) -> usize {
        self.ids.len()
    }

    fn successors(&self, node: usize) -> &[usize] {
        &self.edges[node]
    }
}
