//! Graph generators for tests, benchmarks and experiments. Every
//! generated vertex carries its own index as payload.
use rand::Rng;

use crate::graph::{AdjacencyList, UndirectedGraph};
use crate::vertex::VertexId;

/// Vertex `i` gets payload `i` and the `i`th list as its neighbors
fn from_lists<I>(lists: I) -> UndirectedGraph<usize>
where
    I: IntoIterator<Item = AdjacencyList>,
{
    let lists = lists.into_iter();
    let mut graph = UndirectedGraph::with_capacity(lists.size_hint().0);
    for (i, list) in lists.enumerate() {
        graph.add_vertex_with_edges(i, list);
    }
    graph
}

/// Random graph where vertex `j` is listed as a neighbor of vertex `i`
/// with probability `p`, independently for every ordered pair `i != j`.
///
/// The lists are not symmetrized: `j` may appear in the list of `i`
/// without `i` appearing in the list of `j`.
pub fn random_graph<R: Rng>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> UndirectedGraph<usize> {
    let lists: Vec<AdjacencyList> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| i != j && rng.gen::<f64>() < p)
                .map(VertexId::new)
                .collect()
        })
        .collect();

    from_lists(lists)
}

/// Every vertex lists every other vertex in increasing order
pub fn complete_graph(n: usize) -> UndirectedGraph<usize> {
    from_lists((0..n).map(|i| -> AdjacencyList {
        (0..n).filter(|&j| j != i).map(VertexId::new).collect()
    }))
}

/// Vertex `i` lists its predecessor and its successor, modulo `n`
pub fn cycle_graph(n: usize) -> UndirectedGraph<usize> {
    from_lists((0..n).map(|i| {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        vec![VertexId::new(prev), VertexId::new(next)]
    }))
}

/// Vertex `i` lists `i - 1` and `i + 1` where they exist
pub fn path_graph(n: usize) -> UndirectedGraph<usize> {
    from_lists((0..n).map(|i| {
        let mut list = AdjacencyList::with_capacity(2);
        if i > 0 {
            list.push(VertexId::new(i - 1));
        }
        if i + 1 < n {
            list.push(VertexId::new(i + 1));
        }
        list
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_graph_has_no_self_loops() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_graph(50, 0.3, &mut rng);

        assert_eq!(graph.vertex_count(), 50);
        for v in graph.vertex_ids() {
            let neighbors = graph.neighbors(v).unwrap();
            assert!(neighbors.iter().all(|&u| u != v && graph.contains(u)));
        }
    }

    #[test]
    fn random_graph_extremes() {
        let mut rng = StdRng::seed_from_u64(7);

        let empty = random_graph(10, 0.0, &mut rng);
        assert_eq!(empty.find_connected_components().unwrap().len(), 10);

        let full = random_graph(10, 1.0, &mut rng);
        assert_eq!(full.neighbors(VertexId::new(3)).unwrap().len(), 9);
    }

    #[test]
    fn small_cycles_keep_duplicate_neighbors() {
        // in a 2-cycle predecessor and successor coincide
        let graph = cycle_graph(2);
        let v0 = VertexId::new(0);
        let v1 = VertexId::new(1);
        assert_eq!(graph.neighbors(v0).unwrap(), vec![v1, v1]);

        let single = cycle_graph(1);
        assert_eq!(single.neighbors(v0).unwrap(), vec![v0, v0]);
    }

    #[test]
    fn generated_vertices_carry_their_index() {
        let graph = complete_graph(4);
        assert_eq!(graph.vertex_count(), 4);
        for v in graph.vertex_ids() {
            assert_eq!(graph.vertex_data(v).unwrap(), &v.index());
            let expected: AdjacencyList =
                graph.vertex_ids().filter(|&u| u != v).collect();
            assert_eq!(graph.neighbors(v).unwrap(), expected);
        }

        assert!(complete_graph(0).is_empty());
        assert!(path_graph(0).is_empty());
    }

    #[test]
    fn path_ends_have_one_neighbor() {
        let graph = path_graph(3);
        assert_eq!(graph.neighbors(VertexId::new(0)).unwrap().len(), 1);
        assert_eq!(graph.neighbors(VertexId::new(1)).unwrap().len(), 2);
        assert_eq!(graph.neighbors(VertexId::new(2)).unwrap().len(), 1);
    }
}
