use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult};
use crate::graph::UndirectedGraph;
use crate::state::State;
use crate::vertex::VertexId;

/// The vertices of one connected component, in DFS pre-order
pub type Component = Vec<VertexId>;

#[derive(Debug)]
enum Inst {
    /// Enter `v`: record it and schedule the scan of its neighbors
    Recur(VertexId),
    /// Look at neighbor `u` of `v`, descending if it's unvisited
    Loop(VertexId, VertexId),
}

type InstStack = VecDeque<Inst>;

fn run_inst<T>(
    inst: Inst,
    stack: &mut InstStack,
    state: &mut State,
    graph: &UndirectedGraph<T>,
) -> GraphResult<()> {
    match inst {
        Inst::Recur(v) => {
            state.mut_recur(v);

            graph
                .neighbors(v)?
                .into_iter()
                .rev()
                .for_each(|u| stack.push_front(Inst::Loop(v, u)));
        }
        Inst::Loop(v, u) => {
            if !state.contains(u) {
                warn!(
                    vertex = %v,
                    neighbor = %u,
                    "edge generator produced an unknown vertex"
                );
                return Err(GraphError::MalformedNeighbor {
                    vertex: v,
                    neighbor: u,
                    count: state.num_vertices(),
                });
            }

            if !state.is_visited(u) {
                stack.push_front(Inst::Recur(u));
            }
        }
    }
    Ok(())
}

/// Runs the depth-first search from `root` until every vertex reachable
/// from it has been visited. The neighbors of a vertex are examined one
/// at a time, each after the subtree of the previous one is finished,
/// so the visitation order is exactly that of the recursive DFS.
pub(crate) fn depth_first<T>(
    graph: &UndirectedGraph<T>,
    state: &mut State,
    root: VertexId,
) -> GraphResult<()> {
    if !state.contains(root) {
        return Err(GraphError::OutOfRange {
            id: root,
            count: state.num_vertices(),
        });
    }

    let mut stack: InstStack = VecDeque::new();

    stack.push_front(Inst::Recur(root));
    while let Some(inst) = stack.pop_front() {
        run_inst(inst, &mut stack, state, graph)?;
    }
    Ok(())
}

/// Finds the connected components of `graph`.
///
/// Components are ordered by their lowest vertex id, and each lists its
/// vertices in DFS pre-order following the order of the neighbor lists.
/// Edges are followed as the generators declare them; an edge listed by
/// only one of its endpoints still joins both into one component when
/// it's reached from the listing side.
///
/// Fails with [`GraphError::MalformedNeighbor`] as soon as a generator
/// produces an id that doesn't name a vertex.
pub fn find_components<T>(
    graph: &UndirectedGraph<T>,
) -> GraphResult<Vec<Component>> {
    let mut state = State::initialize(graph.vertex_count());

    for v in graph.vertex_ids() {
        if !state.is_visited(v) {
            depth_first(graph, &mut state, v)?;
            state.add_component();
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        components = state.components().len(),
        "found connected components"
    );

    Ok(state.into_components())
}
