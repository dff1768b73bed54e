//! Vertex, edge and path values stored in the graph arena.

use std::fmt;

use contracts::*;
use netpath_common::{EdgeKind, VertexKind};

/// Index of a vertex in the graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    inner: u32,
}

impl VertexId {
    /// Wraps a raw arena index.
    #[debug_ensures(ret.inner == id)]
    pub fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.inner)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(id: usize) -> Self {
        Self {
            inner: u32::try_from(id).unwrap_or(u32::MAX),
        }
    }
}

/// Index of an edge in the graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    inner: u32,
}

impl EdgeId {
    /// Wraps a raw arena index.
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(id: usize) -> Self {
        Self {
            inner: u32::try_from(id).unwrap_or(u32::MAX),
        }
    }
}

/// A declared port, net or register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    name: String,
    kind: VertexKind,
    width: Option<u32>,
    location: Option<String>,
}

impl Vertex {
    pub(crate) fn new(
        id: VertexId,
        name: String,
        kind: VertexKind,
        width: Option<u32>,
        location: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            width,
            location,
        }
    }

    /// Position in the graph arena.
    #[must_use]
    pub const fn id(&self) -> VertexId {
        self.id
    }

    /// Fully-scoped name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Final segment of the scoped name.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        netpath_common::name::leaf_name(&self.name)
    }

    /// Declared kind, after register promotion.
    #[must_use]
    pub const fn kind(&self) -> VertexKind {
        self.kind
    }

    /// Bit width, when declared.
    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        self.width
    }

    /// Source location, when declared.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Whether a path may begin here.
    #[must_use]
    pub const fn is_startpoint(&self) -> bool {
        self.kind.is_startpoint()
    }

    /// Whether a path may end here.
    #[must_use]
    pub const fn is_endpoint(&self) -> bool {
        self.kind.is_endpoint()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// A directed driver to driven dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    kind: EdgeKind,
}

impl Edge {
    pub(crate) const fn new(from: VertexId, to: VertexId, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }

    /// Driving vertex.
    #[must_use]
    pub const fn from(&self) -> VertexId {
        self.from
    }

    /// Driven vertex.
    #[must_use]
    pub const fn to(&self) -> VertexId {
        self.to
    }

    /// Combinational or sequential.
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }
}

/// An ordered vertex sequence where each consecutive pair is joined by an
/// edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    #[debug_requires(vertices.len() >= 2)]
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// First vertex.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.vertices[0]
    }

    /// Last vertex.
    #[must_use]
    pub fn end(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Whether `vertex` appears anywhere on the path.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }
}

impl IntoIterator for Path {
    type Item = VertexId;
    type IntoIter = std::vec::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}
