use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Stable handle of a vertex, assigned in insertion order when the
/// vertex is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    pub id: VertexId,
    pub data: T,
}

/// Append-only storage of vertex payloads, indexed by `VertexId`
#[derive(Debug, Clone)]
pub struct VertexStore<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexStore<T> {
    fn default() -> Self {
        VertexStore {
            vertices: Vec::new(),
        }
    }
}

impl<T> VertexStore<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        VertexStore {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vertex and returns its id, which is always the
    /// number of vertices stored before the call.
    pub fn add(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { id, data });
        id
    }

    pub fn get(&self, id: VertexId) -> GraphResult<&T> {
        self.vertices
            .get(id.index())
            .map(|vertex| &vertex.data)
            .ok_or(GraphError::OutOfRange {
                id,
                count: self.count(),
            })
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }
}
