use lazy_components::generate::{complete_graph, cycle_graph, path_graph};
use lazy_components::{AdjacencyList, GraphError, UndirectedGraph, VertexId};

/// Tests the components algorithm against graphs whose connected
/// components are known

fn ids(raw: &[usize]) -> AdjacencyList {
    raw.iter().copied().map(VertexId::new).collect()
}

fn sorted(comp: &[VertexId]) -> Vec<usize> {
    let mut comp: Vec<_> = comp.iter().map(|v| v.index()).collect();
    comp.sort_unstable();
    comp
}

fn triangles() -> UndirectedGraph<usize> {
    let mut graph = UndirectedGraph::new();
    for i in 0..6 {
        graph.add_vertex(i * 100);
    }

    let edges: [&[usize]; 6] = [&[1], &[0, 2], &[1], &[4], &[3, 5], &[4]];
    for (i, list) in edges.iter().enumerate() {
        graph.set_edge_generator(VertexId::new(i), ids(list)).unwrap();
    }
    graph
}

#[test]
fn empty_graph() {
    let graph: UndirectedGraph<i32> = UndirectedGraph::new();

    let comps = graph.find_connected_components().unwrap();
    assert!(comps.is_empty());
}

#[test]
fn single_vertex() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex(100);

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps, vec![ids(&[0])]);
}

#[test]
fn isolated_vertices() {
    let mut graph = UndirectedGraph::new();
    for i in 0..5 {
        graph.add_vertex(i * 100);
    }

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps.len(), 5);
    for (ix, comp) in comps.iter().enumerate() {
        assert_eq!(comp, &ids(&[ix]));
    }
}

/// K4 built from closures the way a caller would write them
#[test]
fn k_4() {
    let mut graph = UndirectedGraph::new();
    for i in 0..4 {
        graph.add_vertex(i * 100);
    }
    for i in 0..4 {
        graph
            .set_edge_generator(VertexId::new(i), move || -> AdjacencyList {
                (0..4).filter(|&j| j != i).map(VertexId::new).collect()
            })
            .unwrap();
    }

    let comps = graph.find_connected_components().unwrap();
    for (ix, comp) in comps.iter().enumerate() {
        println!("{}\t{:?}", ix, comp);
    }

    assert_eq!(comps.len(), 1);
    assert_eq!(sorted(&comps[0]), vec![0, 1, 2, 3]);
    assert_eq!(comps, complete_graph(4).find_connected_components().unwrap());
}

#[test]
fn two_triangles() {
    let graph = triangles();

    let comps = graph.find_connected_components().unwrap();
    for (ix, comp) in comps.iter().enumerate() {
        println!("{}\t{:?}", ix, comp);
    }

    assert_eq!(comps.len(), 2);
    assert!(comps.iter().all(|comp| comp.len() == 3));
    assert_eq!(sorted(&comps[0]), vec![0, 1, 2]);
    assert_eq!(sorted(&comps[1]), vec![3, 4, 5]);
}

#[test]
fn ring_of_100() {
    let graph = cycle_graph(100);

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].len(), 100);

    // 0 lists 99 before 1, so the ring is walked backwards
    let expected: Vec<_> = std::iter::once(0).chain((1..100).rev()).collect();
    assert_eq!(comps[0], ids(&expected));
}

#[test]
fn neighbors_of_missing_vertex() {
    let graph = triangles();
    let before = graph.vertex_count();

    let missing = VertexId::new(graph.vertex_count());
    match graph.neighbors(missing) {
        Err(GraphError::OutOfRange { id, count }) => {
            assert_eq!(id, missing);
            assert_eq!(count, 6);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }

    assert_eq!(graph.vertex_count(), before);
    assert_eq!(graph.find_connected_components().unwrap().len(), 2);
}

#[test]
fn several_components_of_mixed_size() {
    let mut graph = UndirectedGraph::new();
    for label in ["A", "B", "C", "D", "E", "F", "G", "H"].iter() {
        graph.add_vertex(label.to_string());
    }

    let edges: [&[usize]; 7] =
        [&[1, 2], &[0, 2], &[0, 1], &[4], &[3, 5], &[4, 6], &[5]];
    for (i, list) in edges.iter().enumerate() {
        graph.set_edge_generator(VertexId::new(i), ids(list)).unwrap();
    }

    let comps = graph.find_connected_components().unwrap();
    let sizes: Vec<_> = comps.iter().map(|comp| comp.len()).collect();
    assert_eq!(sizes, vec![3, 4, 1]);
    assert_eq!(comps[2], ids(&[7]));
    assert_eq!(graph.vertex_data(comps[2][0]).unwrap(), "H");
}

#[test]
fn self_loops_and_duplicates() {
    let mut graph = UndirectedGraph::new();
    for i in 0..3 {
        graph.add_vertex(i);
    }
    graph.set_edge_generator(VertexId::new(0), ids(&[0, 1, 1])).unwrap();
    graph.set_edge_generator(VertexId::new(1), ids(&[0, 2, 2, 1])).unwrap();
    graph.set_edge_generator(VertexId::new(2), ids(&[1])).unwrap();

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps, vec![ids(&[0, 1, 2])]);
}

#[test]
fn custom_payload() {
    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut graph = UndirectedGraph::new();
    graph.add_vertex(Point { x: 0, y: 0 });
    graph.add_vertex(Point { x: 1, y: 0 });
    graph.add_vertex(Point { x: 0, y: 1 });
    let far = graph.add_vertex(Point { x: 10, y: 10 });

    for i in 0..3 {
        let others: AdjacencyList =
            (0..3).filter(|&j| j != i).map(VertexId::new).collect();
        graph.set_edge_generator(VertexId::new(i), others).unwrap();
    }

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps.len(), 2);
    assert_eq!(comps[1], vec![far]);
    assert_eq!(graph.vertex_data(far).unwrap(), &Point { x: 10, y: 10 });
}

#[test]
fn one_sided_edge_joins_component() {
    let mut graph = UndirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.set_edge_generator(a, vec![b]).unwrap();

    // b doesn't list a, and the graph doesn't add it
    assert!(graph.neighbors(b).unwrap().is_empty());

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps, vec![vec![a, b]]);
    assert!(graph.neighbors(b).unwrap().is_empty());
}

#[test]
fn components_do_not_modify_graph() {
    let graph = triangles();

    let snapshot = |graph: &UndirectedGraph<usize>| {
        graph
            .vertex_ids()
            .map(|v| {
                (
                    *graph.vertex_data(v).unwrap(),
                    graph.neighbors(v).unwrap(),
                )
            })
            .collect::<Vec<_>>()
    };

    let before = snapshot(&graph);
    graph.find_connected_components().unwrap();
    graph.find_connected_components().unwrap();
    let after = snapshot(&graph);

    assert_eq!(before, after);
    assert_eq!(graph.vertex_count(), 6);
}

#[test]
fn malformed_neighbor_is_reported() {
    let mut graph = UndirectedGraph::new();
    let a = graph.add_vertex(0);
    graph.add_vertex(1);

    // accepted when set, only the traversal notices
    graph.set_edge_generator(a, ids(&[1, 42])).unwrap();
    assert_eq!(graph.neighbors(a).unwrap(), ids(&[1, 42]));

    let err = graph.find_connected_components().unwrap_err();
    assert!(matches!(
        err,
        GraphError::MalformedNeighbor { neighbor, count: 2, .. }
            if neighbor == VertexId::new(42)
    ));
}

#[test]
fn long_chain_does_not_overflow_the_stack() {
    let n = 200_000;
    let graph = path_graph(n);

    let comps = graph.find_connected_components().unwrap();
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].len(), n);
    assert_eq!(comps[0][n - 1], VertexId::new(n - 1));
}
