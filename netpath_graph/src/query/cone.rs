//! Fan-out and fan-in cones.

use std::collections::VecDeque;

use itertools::Itertools;

use super::PathQuery;
use crate::QueryError;
use crate::vertex::{Vertex, VertexId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl<'g> PathQuery<'g> {
    /// Every legal endpoint reachable from the startpoint `start`, sorted by
    /// name. Empty when `start` is not a startpoint.
    pub fn fanout_endpoints(&self, start: &str) -> Result<Vec<&'g Vertex>, QueryError> {
        let s = self.graph.resolve(start)?;
        if !self.graph.vertex(s).is_startpoint() {
            return Ok(Vec::new());
        }
        Ok(self.cone(s, Direction::Forward, Vertex::is_endpoint))
    }

    /// Every legal startpoint that reaches the endpoint `end`, sorted by
    /// name. Empty when `end` is not an endpoint.
    pub fn fanin_startpoints(&self, end: &str) -> Result<Vec<&'g Vertex>, QueryError> {
        let e = self.graph.resolve(end)?;
        if !self.graph.vertex(e).is_endpoint() {
            return Ok(Vec::new());
        }
        Ok(self.cone(e, Direction::Backward, Vertex::is_startpoint))
    }

    fn cone(
        &self,
        from: VertexId,
        direction: Direction,
        keep: fn(&Vertex) -> bool,
    ) -> Vec<&'g Vertex> {
        let graph = self.graph;
        let neighbours = |v: VertexId| match direction {
            Direction::Forward => graph.successors(v),
            Direction::Backward => graph.predecessors(v),
        };

        let mut visited = vec![false; graph.num_vertices()];
        let mut queue: VecDeque<VertexId> = neighbours(from).iter().copied().collect();
        for v in &queue {
            visited[v.as_usize()] = true;
        }
        while let Some(v) = queue.pop_front() {
            for &next in neighbours(v) {
                if !visited[next.as_usize()] {
                    visited[next.as_usize()] = true;
                    queue.push_back(next);
                }
            }
        }

        visited
            .iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(|(idx, _)| graph.vertex(VertexId::from(idx)))
            .filter(|v| keep(v))
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .collect()
    }
}
