use std::collections::VecDeque;

use crate::NetlistGraph;
use crate::vertex::{Edge, Path, VertexId};

/// Depth-first iterator over simple paths between two vertices.
///
/// The only repeated vertex a path may contain is the start, and only as the
/// final element when the start is also the target.
#[derive(Debug, Clone)]
pub struct PathIter<'g> {
    graph: &'g NetlistGraph,
    target: VertexId,
    /// Current path with the next successor index to try at each vertex.
    stack: Vec<(VertexId, usize)>,
    on_path: Vec<bool>,
}

impl<'g> PathIter<'g> {
    pub(crate) fn new(graph: &'g NetlistGraph, start: VertexId, target: VertexId) -> Self {
        let mut on_path = vec![false; graph.num_vertices()];
        on_path[start.as_usize()] = true;
        Self {
            graph,
            target,
            stack: vec![(start, 0)],
            on_path,
        }
    }

    pub(crate) fn empty(graph: &'g NetlistGraph) -> Self {
        Self {
            graph,
            target: VertexId::new(0),
            stack: Vec::new(),
            on_path: Vec::new(),
        }
    }
}

impl Iterator for PathIter<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            let (vertex, cursor) = self.stack.last_mut()?;
            let vertex = *vertex;
            let successors = self.graph.successors(vertex);

            if *cursor >= successors.len() {
                self.stack.pop();
                self.on_path[vertex.as_usize()] = false;
                continue;
            }
            let next = successors[*cursor];
            *cursor += 1;

            if next == self.target {
                let mut vertices: Vec<VertexId> = self.stack.iter().map(|(v, _)| *v).collect();
                vertices.push(next);
                return Some(Path::new(vertices));
            }
            if self.on_path[next.as_usize()] {
                continue;
            }
            self.on_path[next.as_usize()] = true;
            self.stack.push((next, 0));
        }
    }
}

/// Looks for a cycle of combinational edges through non-register vertices
/// among the vertices reachable from `start`. Returns a vertex on the cycle.
///
/// Kahn's algorithm peels off every vertex with no remaining combinational
/// fan-in; whatever survives lies on or behind a cycle, and walking back
/// through surviving drivers must eventually repeat a vertex.
pub fn find_combinational_cycle(
    graph: &NetlistGraph,
    start: VertexId,
) -> Option<VertexId> {
    let n = graph.num_vertices();

    let mut reachable = vec![false; n];
    reachable[start.as_usize()] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        for &next in graph.successors(v) {
            if !reachable[next.as_usize()] {
                reachable[next.as_usize()] = true;
                queue.push_back(next);
            }
        }
    }

    let considered =
        |v: VertexId| reachable[v.as_usize()] && !graph.vertex(v).kind().is_register();
    let is_comb_link = |e: &Edge| e.kind().is_combinational();

    let mut indegree = vec![0usize; n];
    let mut ready = VecDeque::new();
    for v in (0..n).map(VertexId::from).filter(|v| considered(*v)) {
        indegree[v.as_usize()] = graph
            .fanin_edges(v)
            .iter()
            .map(|id| graph.edge(*id))
            .filter(|e| is_comb_link(e) && considered(e.from()))
            .count();
        if indegree[v.as_usize()] == 0 {
            ready.push_back(v);
        }
    }

    let mut removed = vec![false; n];
    while let Some(v) = ready.pop_front() {
        removed[v.as_usize()] = true;
        for edge in graph.fanout_edges(v).iter().map(|id| graph.edge(*id)) {
            let to = edge.to();
            if is_comb_link(edge) && considered(to) {
                indegree[to.as_usize()] -= 1;
                if indegree[to.as_usize()] == 0 {
                    ready.push_back(to);
                }
            }
        }
    }

    let survivor = |v: VertexId| considered(v) && !removed[v.as_usize()];
    let mut current = (0..n).map(VertexId::from).find(|v| survivor(*v))?;
    let mut seen = vec![false; n];
    while !seen[current.as_usize()] {
        seen[current.as_usize()] = true;
        current = graph
            .fanin_edges(current)
            .iter()
            .map(|id| graph.edge(*id))
            .filter(|e| is_comb_link(e))
            .map(Edge::from)
            .find(|u| survivor(*u))?;
    }
    Some(current)
}
