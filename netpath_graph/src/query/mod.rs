//! Path queries over a built [`NetlistGraph`].
//!
//! Queries never mutate the graph, so any number of [`PathQuery`] values can
//! run against one graph concurrently. A route always has at least one edge;
//! registers are traversed like any other vertex. A query succeeds only when
//! the start vertex is a legal startpoint and the end vertex a legal endpoint.

mod cone;
mod enumerate;

pub use enumerate::PathIter;

use std::collections::VecDeque;

use tracing::debug;

use crate::vertex::{Path, VertexId};
use crate::{NetlistGraph, QueryError};

/// Read-only query handle over one graph.
#[derive(Clone, Copy, Debug)]
pub struct PathQuery<'g> {
    graph: &'g NetlistGraph,
}

impl<'g> PathQuery<'g> {
    /// Query handle for `graph`.
    #[must_use]
    pub const fn new(graph: &'g NetlistGraph) -> Self {
        Self { graph }
    }

    /// The graph being queried.
    #[must_use]
    pub const fn graph(&self) -> &'g NetlistGraph {
        self.graph
    }

    fn is_legal_pair(&self, start: VertexId, end: VertexId) -> bool {
        let legal =
            self.graph.vertex(start).is_startpoint() && self.graph.vertex(end).is_endpoint();
        if !legal {
            debug!(
                "'{}' -> '{}' is not a startpoint/endpoint pair",
                self.graph.vertex(start),
                self.graph.vertex(end)
            );
        }
        legal
    }

    /// True iff a route exists from `start` to `end` and both names have legal
    /// kinds. Resolution failures propagate.
    pub fn path_exists(&self, start: &str, end: &str) -> Result<bool, QueryError> {
        let s = self.graph.resolve(start)?;
        let e = self.graph.resolve(end)?;
        if !self.is_legal_pair(s, e) {
            return Ok(false);
        }
        Ok(self.shortest_route(s, e).is_some())
    }

    /// True iff `name` resolves to a register.
    #[must_use]
    pub fn reg_exists(&self, name: &str) -> bool {
        self.graph
            .resolve_vertex(name)
            .is_ok_and(|v| v.kind().is_register())
    }

    /// True iff `name` resolves to a legal startpoint.
    #[must_use]
    pub fn startpoint_exists(&self, name: &str) -> bool {
        self.graph
            .resolve_vertex(name)
            .is_ok_and(|v| v.is_startpoint())
    }

    /// True iff `name` resolves to a legal endpoint.
    #[must_use]
    pub fn endpoint_exists(&self, name: &str) -> bool {
        self.graph
            .resolve_vertex(name)
            .is_ok_and(|v| v.is_endpoint())
    }

    /// Shortest witness path, if one exists.
    pub fn any_path(&self, start: &str, end: &str) -> Result<Option<Path>, QueryError> {
        self.any_path_via::<&str>(start, &[], end)
    }

    /// Witness path that visits `through` in order. Each leg is a shortest
    /// route, so the result need not be simple. Through points may be of any
    /// kind.
    pub fn any_path_via<S: AsRef<str>>(
        &self,
        start: &str,
        through: &[S],
        end: &str,
    ) -> Result<Option<Path>, QueryError> {
        let s = self.graph.resolve(start)?;
        let mut points = vec![s];
        for name in through {
            points.push(self.graph.resolve(name.as_ref())?);
        }
        let e = self.graph.resolve(end)?;
        points.push(e);

        if !self.is_legal_pair(s, e) {
            return Ok(None);
        }

        let mut vertices = vec![s];
        for leg in points.windows(2) {
            let Some(route) = self.shortest_route(leg[0], leg[1]) else {
                debug!(
                    "no route for leg {} -> {}",
                    self.graph.vertex(leg[0]),
                    self.graph.vertex(leg[1])
                );
                return Ok(None);
            };
            vertices.extend(route.into_iter().skip(1));
        }
        Ok(Some(Path::new(vertices)))
    }

    /// Lazily yields every simple path from `start` to `end`. When the two
    /// names are the same vertex, paths are cycles back to it.
    ///
    /// Fails if a combinational cycle is reachable from `start`. Illegal
    /// start or end kinds give an empty sequence.
    pub fn enumerate_paths(&self, start: &str, end: &str) -> Result<PathIter<'g>, QueryError> {
        let s = self.graph.resolve(start)?;
        let e = self.graph.resolve(end)?;

        if let Some(vertex) = enumerate::find_combinational_cycle(self.graph, s) {
            return Err(QueryError::CombinationalCycle {
                start: self.graph.vertex(s).name().to_string(),
                vertex: self.graph.vertex(vertex).name().to_string(),
            });
        }

        if !self.is_legal_pair(s, e) {
            return Ok(PathIter::empty(self.graph));
        }
        Ok(PathIter::new(self.graph, s, e))
    }

    /// Runs [`Self::path_exists`] over every pair, in parallel with the
    /// `rayon` feature. Results keep the order of `pairs`.
    pub fn path_exists_many<S>(&self, pairs: &[(S, S)]) -> Vec<Result<bool, QueryError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(s, e)| self.path_exists(s.as_ref(), e.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            pairs
                .iter()
                .map(|(s, e)| self.path_exists(s.as_ref(), e.as_ref()))
                .collect()
        }
    }

    /// Breadth-first route of at least one edge, as a vertex list.
    pub(crate) fn shortest_route(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        let mut parent: Vec<Option<VertexId>> = vec![None; self.graph.num_vertices()];
        let mut queue = VecDeque::new();

        for &next in self.graph.successors(from) {
            if parent[next.as_usize()].is_none() {
                parent[next.as_usize()] = Some(from);
                queue.push_back(next);
            }
        }

        while let Some(v) = queue.pop_front() {
            if v == to {
                return Some(Self::unwind(&parent, from, to));
            }
            for &next in self.graph.successors(v) {
                if parent[next.as_usize()].is_none() {
                    parent[next.as_usize()] = Some(v);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn unwind(parent: &[Option<VertexId>], from: VertexId, to: VertexId) -> Vec<VertexId> {
        let mut route = vec![to];
        let mut current = to;
        // At least one step, so a cycle back to `from` keeps both ends.
        while let Some(p) = parent[current.as_usize()] {
            route.push(p);
            if p == from {
                break;
            }
            current = p;
        }
        route.reverse();
        route
    }
}
