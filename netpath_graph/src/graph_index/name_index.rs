//! Name lookup over the vertex registry.
//!
//! Two immutable maps are kept: fully-scoped name to vertex, and leaf name to
//! every vertex sharing that leaf. A query name is tried as an exact name,
//! then (for dotted names in a single-top design) with the top scope
//! prepended, and finally as a leaf name.

use std::collections::HashMap;

use netpath_common::name;

use super::VertexRegistry;
use crate::vertex::VertexId;

/// Outcome of a name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Exactly one vertex matched.
    Found(VertexId),
    /// Nothing matched.
    Missing,
    /// A leaf name matched several vertices.
    Ambiguous(&'a [VertexId]),
}

/// Exact and leaf name maps, built once per graph.
#[derive(Clone, Debug)]
pub struct NameIndex {
    exact: HashMap<String, VertexId>,
    leaves: HashMap<String, Vec<VertexId>>,
    /// Prefix tried for dotted names that miss the exact map.
    top_prefix: Option<String>,
}

impl NameIndex {
    /// Index every vertex in `registry`. `top_prefix` enables expansion of
    /// dotted names relative to the single top scope.
    pub fn build(registry: &VertexRegistry, top_prefix: Option<String>) -> Self {
        let mut exact = HashMap::with_capacity(registry.len());
        let mut leaves: HashMap<String, Vec<VertexId>> = HashMap::new();

        for vertex in registry.vertices() {
            exact.insert(vertex.name().to_string(), vertex.id());
            leaves
                .entry(vertex.leaf_name().to_string())
                .or_default()
                .push(vertex.id());
        }

        tracing::event!(
            tracing::Level::DEBUG,
            "name index: {} names, {} distinct leaves",
            exact.len(),
            leaves.len()
        );

        Self {
            exact,
            leaves,
            top_prefix,
        }
    }

    /// Exact fully-scoped lookup, no fallbacks.
    #[must_use]
    pub fn exact(&self, full_name: &str) -> Option<VertexId> {
        self.exact.get(full_name).copied()
    }

    /// Resolves `query` against the exact map, the top prefix, then leaves.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Lookup<'_> {
        if let Some(id) = self.exact(query) {
            return Lookup::Found(id);
        }

        if name::is_qualified(query) {
            if let Some(top) = &self.top_prefix {
                let expanded = format!("{top}{}{query}", name::SEPARATOR);
                if let Some(id) = self.exact(&expanded) {
                    return Lookup::Found(id);
                }
            }
        }

        match self.leaves.get(query).map(Vec::as_slice) {
            Some([id]) => Lookup::Found(*id),
            Some(ids) if ids.len() > 1 => Lookup::Ambiguous(ids),
            _ => Lookup::Missing,
        }
    }

    /// Number of vertices whose leaf name is `leaf`.
    #[must_use]
    pub fn leaf_count(&self, leaf: &str) -> usize {
        self.leaves.get(leaf).map_or(0, Vec::len)
    }
}
