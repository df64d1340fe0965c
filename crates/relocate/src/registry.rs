// ABOUTME: Per-run registry mapping fragment keys to fragment nodes.
// ABOUTME: Last registration wins; enumeration follows first-insertion order.

use std::collections::HashMap;

use crate::tree::DocumentTree;

/// Transient `cid` → fragment mapping built at the start of each run.
///
/// Fragments without the key attribute share the `None` key.
#[derive(Debug, Clone)]
pub struct Registry<H> {
    order: Vec<Option<String>>,
    entries: HashMap<Option<String>, H>,
}

impl<H: Copy> Registry<H> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Indexes every `tag` element of `tree` by its `key_attribute`.
    pub fn index<T>(tree: &T, tag: &str, key_attribute: &str) -> Self
    where
        T: DocumentTree<Handle = H>,
    {
        let mut registry = Self::new();
        for node in tree.elements_by_tag(tag) {
            registry.insert(tree.attribute(node, key_attribute), node);
        }
        registry
    }

    /// Registers `node` under `key`, replacing any earlier fragment.
    ///
    /// Returns the fragment that was replaced, if any.
    pub fn insert(&mut self, key: Option<String>, node: H) -> Option<H> {
        let previous = self.entries.insert(key.clone(), node);
        if previous.is_none() {
            self.order.push(key);
        } else {
            tracing::trace!(cid = ?key, "duplicate fragment key, last one wins");
        }
        previous
    }

    pub fn get(&self, key: Option<&str>) -> Option<H> {
        self.entries.get(&key.map(str::to_string)).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, H)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|node| (key.as_deref(), *node)))
    }
}

impl<H: Copy> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}
