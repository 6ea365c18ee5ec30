use std::fmt;

use tracing::trace;

use crate::algorithm::{self, Component};
use crate::error::{GraphError, GraphResult};
use crate::vertex::{Vertex, VertexId, VertexStore};

pub type AdjacencyList = Vec<VertexId>;

/// Produces the neighbor list of a single vertex on demand.
///
/// Implemented for stored adjacency lists and for closures returning
/// one. The graph never validates the output: duplicates, self loops
/// and ids of vertices that don't exist are handed back verbatim by
/// [`UndirectedGraph::neighbors`]. Implementations are expected to
/// return the same list on every call.
pub trait EdgeGenerator {
    fn neighbors(&self) -> AdjacencyList;
}

impl EdgeGenerator for AdjacencyList {
    fn neighbors(&self) -> AdjacencyList {
        self.clone()
    }
}

impl<F> EdgeGenerator for F
where
    F: Fn() -> AdjacencyList,
{
    fn neighbors(&self) -> AdjacencyList {
        self()
    }
}

/// An undirected graph whose adjacency is supplied per vertex by an
/// [`EdgeGenerator`]. Vertices are only ever appended; each one starts
/// out with an empty neighbor list until its generator is replaced.
pub struct UndirectedGraph<T> {
    vertices: VertexStore<T>,
    adjacency: Vec<Box<dyn EdgeGenerator>>,
}

impl<T> Default for UndirectedGraph<T> {
    fn default() -> Self {
        UndirectedGraph {
            vertices: VertexStore::default(),
            adjacency: Vec::new(),
        }
    }
}

impl<T> UndirectedGraph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        UndirectedGraph {
            vertices: VertexStore::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    pub fn add_vertex(&mut self, data: T) -> VertexId {
        self.add_vertex_with_edges(data, AdjacencyList::new())
    }

    /// Appends a vertex that starts out with `generator` as its
    /// neighbor provider instead of an empty list.
    pub fn add_vertex_with_edges<G>(&mut self, data: T, generator: G) -> VertexId
    where
        G: EdgeGenerator + 'static,
    {
        let id = self.vertices.add(data);
        self.adjacency.push(Box::new(generator));
        debug_assert_eq!(self.adjacency.len(), self.vertices.count());
        trace!(%id, "added vertex");
        id
    }

    /// Replaces the neighbor provider of `vertex`. The ids the
    /// generator produces are not checked here; a broken id surfaces
    /// as [`GraphError::MalformedNeighbor`] once a traversal reaches it.
    pub fn set_edge_generator<G>(
        &mut self,
        vertex: VertexId,
        generator: G,
    ) -> GraphResult<()>
    where
        G: EdgeGenerator + 'static,
    {
        let count = self.vertex_count();
        let slot = self
            .adjacency
            .get_mut(vertex.index())
            .ok_or(GraphError::OutOfRange { id: vertex, count })?;
        *slot = Box::new(generator);
        trace!(%vertex, "replaced edge generator");
        Ok(())
    }

    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<AdjacencyList> {
        self.adjacency
            .get(vertex.index())
            .map(|generator| generator.neighbors())
            .ok_or(GraphError::OutOfRange {
                id: vertex,
                count: self.vertex_count(),
            })
    }

    pub fn vertex_data(&self, vertex: VertexId) -> GraphResult<&T> {
        self.vertices.get(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(vertex)
    }

    /// Iterates over all vertices in id order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all vertex ids in increasing order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// Partitions the graph into connected components, see
    /// [`algorithm::find_components`].
    pub fn find_connected_components(&self) -> GraphResult<Vec<Component>> {
        algorithm::find_components(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for UndirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adjacency: Vec<_> =
            self.adjacency.iter().map(|g| g.neighbors()).collect();

        f.debug_struct("UndirectedGraph")
            .field("vertices", &self.vertices)
            .field("adjacency", &adjacency)
            .finish()
    }
}
