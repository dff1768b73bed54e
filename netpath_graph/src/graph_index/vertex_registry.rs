use std::collections::{HashMap, HashSet};

use netpath_common::{DeclaredEntity, NetlistError, VertexKind};

use crate::vertex::{Vertex, VertexId};

/// Vertex arena with a per-kind index.
#[derive(Clone, Debug)]
pub struct VertexRegistry {
    /// Vertices in declaration order; a vertex's id is its position.
    vertices: Vec<Vertex>,
    /// Maps vertex kinds to the vertices of that kind
    kind_indices: HashMap<VertexKind, Vec<VertexId>>,
}

impl VertexRegistry {
    /// Creates one vertex per entity. Duplicate names are malformed.
    pub fn build(entities: &[DeclaredEntity]) -> Result<Self, NetlistError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(entities.len());
        let mut vertices = Vec::with_capacity(entities.len());

        for (idx, entity) in entities.iter().enumerate() {
            if !seen.insert(entity.name.as_str()) {
                return Err(NetlistError::malformed(format!(
                    "vertex '{}' declared more than once",
                    entity.name
                )));
            }
            vertices.push(Vertex::new(
                VertexId::from(idx),
                entity.name.clone(),
                entity.kind,
                entity.width,
                entity.location.clone(),
            ));
        }

        let kind_indices = Self::build_kind_indices(&vertices);
        Ok(Self {
            vertices,
            kind_indices,
        })
    }

    fn build_kind_indices(vertices: &[Vertex]) -> HashMap<VertexKind, Vec<VertexId>> {
        let mut kind_indices: HashMap<VertexKind, Vec<VertexId>> = HashMap::new();
        for vertex in vertices {
            kind_indices
                .entry(vertex.kind())
                .or_default()
                .push(vertex.id());
        }
        kind_indices
    }

    /// Number of vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no entities were declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex for `id`.
    #[must_use]
    pub fn get(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.as_usize()]
    }

    /// Every vertex, indexed by id.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices of one kind, in declaration order.
    #[must_use]
    pub fn of_kind(&self, kind: VertexKind) -> &[VertexId] {
        self.kind_indices
            .get(&kind)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}
