//! Namespace imports of a compilation unit.

use std::collections::BTreeSet;

use indexmap::IndexSet;

/// Unique, order-preserving set of imported namespaces.
///
/// # Example
///
/// ```
/// use rosalina_codegen::ast::ImportSet;
///
/// let imports = ImportSet::canonical(["UnityEngine.UIElements", "UnityEngine", "UnityEngine"]);
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(names, ["UnityEngine", "UnityEngine.UIElements"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    namespaces: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set in ordinal order, independent of the order names arrive in.
    pub fn canonical<'a>(namespaces: impl IntoIterator<Item = &'a str>) -> Self {
        let sorted: BTreeSet<&str> = namespaces.into_iter().collect();
        Self {
            namespaces: sorted.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
