//! Basic plugin architecture.
//!
//! Plugins are replayed in the sequence they were registered; registration
//! order *is* the plugin sequence. There are no dependency semantics here,
//! use `ext_order::ExtensionManager` when plugins declare what they need.

/// Plugin container with no ordering logic.
#[derive(Debug, Clone)]
pub struct PluginManager<P> {
    plugins: Vec<P>,
}

impl<P> Default for PluginManager<P> {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }
}

impl<P> PluginManager<P> {
    /// Create an empty plugin manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single plugin.
    pub fn register(&mut self, plugin: P) {
        self.plugins.push(plugin);
        tracing::trace!(count = self.plugins.len(), "Registered plugin");
    }

    /// Register several plugins at once, keeping their relative order.
    pub fn extend(&mut self, plugins: impl IntoIterator<Item = P>) {
        for plugin in plugins {
            self.register(plugin);
        }
    }

    /// Registered plugins in registration order.
    pub fn plugins(&self) -> &[P] {
        &self.plugins
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl<'a, P> IntoIterator for &'a PluginManager<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
