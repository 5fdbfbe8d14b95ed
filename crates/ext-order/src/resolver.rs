//! Resolution of a registration snapshot into an execution order.

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::graph::{DependencyGraph, NodeIndex};
use crate::scc::{Condensation, strongly_connected};
use crate::sequence::stable_order;
use crate::tags::TagIndex;

/// Computes dependency-respecting orders for extension snapshots.
///
/// Every call works from scratch on the slice it is given; no state is kept
/// between calls. Resolution is all-or-nothing: either every extension is
/// placed or an error explains why the set cannot be linearized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Compute the execution order as registration positions.
    ///
    /// # Errors
    ///
    /// - `Error::MissingIdentity` if an extension provides no tags.
    /// - `Error::MissingDependency` / `Error::ExclusionConflict` from tag
    ///   validation.
    /// - `Error::DuplicateIdentity` / `Error::AmbiguousProvider` under the
    ///   strict provider policy.
    /// - `Error::CircularDependency` naming the first cycle found.
    pub fn plan(&self, extensions: &[Extension]) -> Result<Vec<NodeIndex>> {
        let policy = self.config.providers;

        let index = TagIndex::build(extensions)?;
        index.validate()?;
        index.check_identities(policy)?;

        let graph = DependencyGraph::from_extensions(extensions, &index, policy)?;

        let components = strongly_connected(&graph);
        if let Some(cycle) = components.first_cycle(&graph) {
            let members: Vec<String> = cycle.iter().map(|&n| graph.id(n).to_string()).collect();
            tracing::debug!(?members, "Dependency cycle detected");
            return Err(Error::CircularDependency { members });
        }

        let condensation = Condensation::new(&graph, &components);
        let mut plan = Vec::with_capacity(extensions.len());
        for node in stable_order(&condensation) {
            match condensation.members(node) {
                [position] => plan.push(*position),
                members => {
                    return Err(Error::invariant(format!(
                        "condensed node {node} has {} members after cycle check",
                        members.len()
                    )));
                }
            }
        }

        if plan.len() != extensions.len() {
            return Err(Error::invariant(format!(
                "ordered {} of {} extensions",
                plan.len(),
                extensions.len()
            )));
        }

        tracing::debug!(extensions = plan.len(), "Resolved extension order");
        Ok(plan)
    }

    /// Order `extensions` so every dependency precedes its dependents.
    ///
    /// See [`plan`](Self::plan) for the failure modes.
    pub fn order<'a>(&self, extensions: &'a [Extension]) -> Result<Vec<&'a Extension>> {
        self.plan(extensions)?
            .into_iter()
            .map(|position| {
                extensions.get(position).ok_or_else(|| {
                    Error::invariant(format!("no extension registered at position {position}"))
                })
            })
            .collect()
    }
}

/// Order `extensions` with the default (strict) configuration.
pub fn resolve(extensions: &[Extension]) -> Result<Vec<&Extension>> {
    Resolver::default().order(extensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderPolicy;
    use pretty_assertions::assert_eq;

    fn ids(ordered: Vec<&Extension>) -> Vec<&str> {
        ordered.into_iter().filter_map(Extension::id).collect()
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(resolve(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_orders_first() {
        let extensions = [
            Extension::providing(["a"]),
            Extension::providing(["b"]).run_first(),
        ];
        assert_eq!(ids(resolve(&extensions).unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn test_orders_last() {
        let extensions = [
            Extension::providing(["a"]).run_last(),
            Extension::providing(["b"]),
        ];
        assert_eq!(ids(resolve(&extensions).unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn test_uses_orders_when_provided() {
        let extensions = [
            Extension::providing(["a"]).using(["b", "absent"]),
            Extension::providing(["b"]),
        ];
        assert_eq!(ids(resolve(&extensions).unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn test_plan_returns_positions() {
        let extensions = [
            Extension::providing(["a"]).needing(["c"]),
            Extension::providing(["b"]),
            Extension::providing(["c"]),
        ];
        assert_eq!(Resolver::default().plan(&extensions).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_self_need_is_circular() {
        let extensions = [Extension::providing(["a", "x"]).needing(["x"])];
        match resolve(&extensions).unwrap_err() {
            Error::CircularDependency { members } => assert_eq!(members, vec!["a"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_depending_on_last_is_circular() {
        let extensions = [
            Extension::providing(["f"]).needing(["l"]).run_first(),
            Extension::providing(["l"]).run_last(),
        ];
        assert!(matches!(
            resolve(&extensions),
            Err(Error::CircularDependency { .. })
        ));
    }

    #[test]
    fn test_last_wins_allows_duplicate_identities() {
        let extensions = [
            Extension::providing(["a"]),
            Extension::providing(["a"]),
            Extension::providing(["b"]).needing(["a"]),
        ];
        assert!(matches!(
            resolve(&extensions),
            Err(Error::DuplicateIdentity { .. })
        ));

        let resolver =
            Resolver::new(ResolverConfig::default().with_providers(ProviderPolicy::LastWins));
        assert_eq!(resolver.plan(&extensions).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let extensions = [
            Extension::providing(["x"]).using(["z"]),
            Extension::providing(["y"]).run_last(),
            Extension::providing(["z"]),
            Extension::providing(["w"]).run_first(),
        ];
        let resolver = Resolver::default();
        let first = resolver.plan(&extensions).unwrap();
        for _ in 0..5 {
            assert_eq!(resolver.plan(&extensions).unwrap(), first);
        }
        assert_eq!(first, vec![3, 2, 0, 1]);
    }
}
