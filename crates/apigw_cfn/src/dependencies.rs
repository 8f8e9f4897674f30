//! Method dependency aggregation for the deployment resource.

use std::collections::BTreeSet;

/// Deduplicated set of resource names another resource must wait for.
///
/// Iteration order is byte-lexicographic, so the resulting `DependsOn` list
/// is the same on every run regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: BTreeSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl FromIterator<String> for DependencySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for DependencySet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}
