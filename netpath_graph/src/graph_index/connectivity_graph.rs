use itertools::Itertools;
use netpath_common::{ConnectivityFact, NetlistError};

use super::VertexRegistry;
use crate::vertex::{Edge, EdgeId, VertexId};

/// Edge arena with per-vertex adjacency.
#[derive(Clone, Debug)]
pub struct ConnectivityGraph {
    edges: Vec<Edge>,
    /// Outgoing edges per vertex
    fanout_edges: Vec<Vec<EdgeId>>,
    /// Incoming edges per vertex
    fanin_edges: Vec<Vec<EdgeId>>,
    /// Precomputed distinct successors (edge kind ignored) for traversal
    successors: Vec<Vec<VertexId>>,
    /// Precomputed distinct predecessors (edge kind ignored) for traversal
    predecessors: Vec<Vec<VertexId>>,
}

impl ConnectivityGraph {
    /// Adds one edge per fact. `lookup` maps an exact fully-scoped name to its
    /// vertex. Only registers may drive themselves.
    pub fn build<F>(
        registry: &VertexRegistry,
        facts: &[ConnectivityFact],
        lookup: F,
    ) -> Result<Self, NetlistError>
    where
        F: Fn(&str) -> Option<VertexId>,
    {
        let num_vertices = registry.len();
        let mut edges = Vec::with_capacity(facts.len());
        let mut fanout_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); num_vertices];
        let mut fanin_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); num_vertices];

        for fact in facts {
            let from = lookup(&fact.driver)
                .ok_or_else(|| NetlistError::unknown_vertex(fact.driver.as_str()))?;
            let to = lookup(&fact.driven)
                .ok_or_else(|| NetlistError::unknown_vertex(fact.driven.as_str()))?;
            if from == to && !registry.get(from).kind().is_register() {
                return Err(NetlistError::malformed(format!(
                    "'{}' drives itself but is not a register",
                    fact.driver
                )));
            }

            let id = EdgeId::from(edges.len());
            edges.push(Edge::new(from, to, fact.kind));
            fanout_edges[from.as_usize()].push(id);
            fanin_edges[to.as_usize()].push(id);
        }

        let successors = Self::precompute_neighbours(&edges, &fanout_edges, Edge::to);
        let predecessors = Self::precompute_neighbours(&edges, &fanin_edges, Edge::from);

        Ok(Self {
            edges,
            fanout_edges,
            fanin_edges,
            successors,
            predecessors,
        })
    }

    fn precompute_neighbours(
        edges: &[Edge],
        adjacency: &[Vec<EdgeId>],
        endpoint: fn(&Edge) -> VertexId,
    ) -> Vec<Vec<VertexId>> {
        adjacency
            .iter()
            .map(|ids| {
                ids.iter()
                    .map(|id| endpoint(&edges[id.as_usize()]))
                    .unique()
                    .collect()
            })
            .collect()
    }

    /// Number of stored edges, parallel edges included.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edge for `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.as_usize()]
    }

    /// Every edge, indexed by id.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving `vertex`.
    #[must_use]
    pub fn fanout_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.fanout_edges[vertex.as_usize()].as_slice()
    }

    /// Edges entering `vertex`.
    #[must_use]
    pub fn fanin_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.fanin_edges[vertex.as_usize()].as_slice()
    }

    /// Distinct vertices driven by `vertex`.
    #[must_use]
    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        self.successors[vertex.as_usize()].as_slice()
    }

    /// Distinct vertices driving `vertex`.
    #[must_use]
    pub fn predecessors(&self, vertex: VertexId) -> &[VertexId] {
        self.predecessors[vertex.as_usize()].as_slice()
    }
}
