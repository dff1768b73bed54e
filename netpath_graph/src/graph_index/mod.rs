//! The netlist graph and its indices.
//!
//! A [`NetlistGraph`] is built once from a parsed description and never
//! mutated afterwards, so it can be shared freely between query threads.

mod connectivity_graph;
mod name_index;
mod vertex_registry;

pub use connectivity_graph::ConnectivityGraph;
pub use name_index::{Lookup, NameIndex};
pub use vertex_registry::VertexRegistry;

use contracts::*;
use netpath_common::{LoadConfig, NetlistDescription, NetlistError, VertexKind};
use tracing::info;

use crate::QueryError;
use crate::vertex::{Edge, EdgeId, Path, Vertex, VertexId};

/// Directed connectivity graph over the declared entities of one netlist.
#[derive(Clone, Debug)]
pub struct NetlistGraph {
    registry: VertexRegistry,
    connectivity: ConnectivityGraph,
    names: NameIndex,
    top_scopes: Vec<String>,
    config: LoadConfig,
}

impl NetlistGraph {
    /// Builds the graph. Either every entity and fact is accepted or an error
    /// is returned and nothing is built.
    #[debug_ensures(ret.is_err() || ret.as_ref().is_ok_and(|g| g.num_vertices() == description.entities.len()))]
    #[debug_ensures(ret.is_err() || ret.as_ref().is_ok_and(|g| g.num_edges() == description.facts.len()))]
    pub fn build(
        description: &NetlistDescription,
        config: &LoadConfig,
    ) -> Result<Self, NetlistError> {
        let start = std::time::Instant::now();

        let registry = VertexRegistry::build(&description.entities)?;
        let top_prefix = if config.expand_top_prefix {
            description.single_top().map(str::to_string)
        } else {
            None
        };
        let names = NameIndex::build(&registry, top_prefix);
        let connectivity =
            ConnectivityGraph::build(&registry, &description.facts, |n| names.exact(n))?;

        let graph = Self {
            registry,
            connectivity,
            names,
            top_scopes: description.top_scopes.clone(),
            config: config.clone(),
        };

        info!(
            "netlist graph built in {:?}: {} vertices, {} edges",
            start.elapsed(),
            graph.num_vertices(),
            graph.num_edges()
        );

        if config.check_graph {
            crate::check::log_warnings(&graph);
        }

        Ok(graph)
    }

    /// Number of vertices.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.registry.len()
    }

    /// Number of edges.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.connectivity.num_edges()
    }

    /// Vertex for `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.registry.get(id)
    }

    /// Every vertex, indexed by id.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        self.registry.vertices()
    }

    /// Vertices of one kind, in declaration order.
    #[must_use]
    pub fn vertices_of_kind(&self, kind: VertexKind) -> &[VertexId] {
        self.registry.of_kind(kind)
    }

    /// Edge for `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.connectivity.edge(id)
    }

    /// Every edge, indexed by id.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.connectivity.edges()
    }

    /// Edges leaving `vertex`.
    #[must_use]
    pub fn fanout_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.connectivity.fanout_edges(vertex)
    }

    /// Edges entering `vertex`.
    #[must_use]
    pub fn fanin_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.connectivity.fanin_edges(vertex)
    }

    /// Distinct vertices driven by `vertex`.
    #[must_use]
    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        self.connectivity.successors(vertex)
    }

    /// Distinct vertices driving `vertex`.
    #[must_use]
    pub fn predecessors(&self, vertex: VertexId) -> &[VertexId] {
        self.connectivity.predecessors(vertex)
    }

    /// Number of distinct vertices `vertex` drives.
    #[must_use]
    pub fn fanout_degree(&self, vertex: VertexId) -> usize {
        self.successors(vertex).len()
    }

    /// Number of distinct vertices driving `vertex`.
    #[must_use]
    pub fn fanin_degree(&self, vertex: VertexId) -> usize {
        self.predecessors(vertex).len()
    }

    /// Checks if `from` directly drives `to`.
    #[must_use]
    pub fn is_connected(&self, from: VertexId, to: VertexId) -> bool {
        self.successors(from).contains(&to)
    }

    /// The name index.
    #[must_use]
    pub const fn names(&self) -> &NameIndex {
        &self.names
    }

    /// Top-level scope names, in declaration order.
    #[must_use]
    pub fn top_scopes(&self) -> &[String] {
        &self.top_scopes
    }

    /// Configuration the graph was built with.
    #[must_use]
    pub const fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Resolves a query name to a vertex.
    pub fn resolve(&self, query: &str) -> Result<VertexId, QueryError> {
        match self.names.lookup(query) {
            Lookup::Found(id) => Ok(id),
            Lookup::Missing => Err(QueryError::name_not_found(query)),
            Lookup::Ambiguous(ids) => {
                let mut candidates: Vec<String> = ids
                    .iter()
                    .map(|id| self.vertex(*id).name().to_string())
                    .collect();
                candidates.sort();
                Err(QueryError::ambiguous(query, candidates))
            }
        }
    }

    /// Like [`Self::resolve`], returning the vertex itself.
    pub fn resolve_vertex(&self, query: &str) -> Result<&Vertex, QueryError> {
        self.resolve(query).map(|id| self.vertex(id))
    }

    /// Fully-scoped names along a path.
    #[must_use]
    pub fn path_names(&self, path: &Path) -> Vec<&str> {
        path.vertices()
            .iter()
            .map(|id| self.vertex(*id).name())
            .collect()
    }
}
