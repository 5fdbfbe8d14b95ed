//! Append-only registry preserving registration order.

/// Ordered, append-only sequence of registered items.
///
/// Registration order is the only tie-break signal available to the
/// resolver, so the registry never reorders, deduplicates or validates
/// what it is given. Callers must not register while a resolution pass is
/// reading a [`snapshot`](Self::snapshot); no internal locking is provided.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Registry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the registry.
    pub fn register(&mut self, item: T) {
        self.items.push(item);
        tracing::trace!(position = self.items.len() - 1, "Registered item");
    }

    /// Append every item from `items`, in iteration order.
    pub fn register_all(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.register(item);
        }
    }

    /// Registered items in registration order.
    pub fn snapshot(&self) -> &[T] {
        &self.items
    }

    /// Iterate over registered items in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.register_all(iter);
        registry
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Registry<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_registry_is_empty() {
        let registry: Registry<&str> = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = Registry::new();
        registry.register("b");
        registry.register("a");
        registry.register("c");

        let seen: Vec<_> = registry.iter().copied().collect();
        assert_eq!(seen, vec!["b", "a", "c"]);
        assert_eq!(registry.snapshot(), &["b", "a", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut registry = Registry::new();
        registry.register("x");
        registry.register("x");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_all_and_collect() {
        let mut registry = Registry::new();
        registry.register(1);
        registry.register_all([2, 3]);
        assert_eq!(registry.snapshot(), &[1, 2, 3]);

        let collected: Registry<i32> = (1..=3).collect();
        assert_eq!(collected.snapshot(), registry.snapshot());
    }

    #[test]
    fn test_borrowed_and_owned_iteration() {
        let registry: Registry<String> = ["a", "b"].into_iter().map(String::from).collect();

        let mut borrowed = Vec::new();
        for item in &registry {
            borrowed.push(item.as_str());
        }
        assert_eq!(borrowed, vec!["a", "b"]);

        let owned: Vec<String> = registry.into_iter().collect();
        assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
    }
}
