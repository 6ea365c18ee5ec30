use crate::vertex::VertexId;

/// Book-keeping of a single components traversal
#[derive(Default, Debug, Clone)]
pub(crate) struct State {
    pub(crate) visited: Vec<bool>,
    pub(crate) component: Vec<VertexId>,
    pub(crate) components: Vec<Vec<VertexId>>,
}

impl State {
    pub(crate) fn initialize(num_vertices: usize) -> State {
        State {
            visited: vec![false; num_vertices],
            component: Vec::new(),
            components: Vec::new(),
        }
    }

    pub(crate) fn num_vertices(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn contains(&self, v: VertexId) -> bool {
        v.index() < self.visited.len()
    }

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v.index()]
    }

    /// Marks `v` as visited and appends it to the component currently
    /// being built, i.e. records `v` in DFS pre-order. Callers check
    /// `contains(v)` first.
    pub(crate) fn mut_recur(&mut self, v: VertexId) {
        debug_assert!(self.contains(v));
        self.visited[v.index()] = true;
        self.component.push(v);
    }

    /// Closes the component currently being built
    pub(crate) fn add_component(&mut self) {
        let component = std::mem::take(&mut self.component);
        if !component.is_empty() {
            self.components.push(component);
        }
    }

    pub(crate) fn components(&self) -> &Vec<Vec<VertexId>> {
        &self.components
    }

    pub(crate) fn into_components(self) -> Vec<Vec<VertexId>> {
        self.components
    }
}
