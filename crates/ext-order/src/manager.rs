//! Registry of extensions with dependency-aware ordering.

use ext_registry::Registry;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::extension::Extension;
use crate::manifest::ExtensionSet;
use crate::resolver::Resolver;

/// Plugin architecture driven by [`Extension`] declarations.
///
/// Extensions are registered in any order; [`order`](Self::order) resolves
/// the current registrations into an execution sequence. Nothing is cached,
/// each call recomputes from the registered set.
#[derive(Debug, Clone, Default)]
pub struct ExtensionManager {
    registry: Registry<Extension>,
    resolver: Resolver,
}

impl ExtensionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            registry: Registry::new(),
            resolver: Resolver::new(config),
        }
    }

    /// Create a manager holding every extension of `set`, using its resolver
    /// configuration.
    pub fn from_set(set: ExtensionSet) -> Self {
        let mut manager = Self::with_config(set.resolver);
        manager.registry.register_all(set.extensions);
        manager
    }

    pub fn register(&mut self, extension: Extension) {
        self.registry.register(extension);
    }

    /// Registered extensions in registration order.
    pub fn extensions(&self) -> &[Extension] {
        self.registry.snapshot()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Extension> {
        self.registry.iter()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve the registered extensions into execution order.
    pub fn order(&self) -> Result<Vec<&Extension>> {
        self.resolver.order(self.registry.snapshot())
    }
}

impl Extend<Extension> for ExtensionManager {
    fn extend<I: IntoIterator<Item = Extension>>(&mut self, iter: I) {
        self.registry.register_all(iter);
    }
}

impl<'a> IntoIterator for &'a ExtensionManager {
    type Item = &'a Extension;
    type IntoIter = std::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
