//! Cross-algorithm SSSP invariants (spec §8, "Universal invariants").
use assert_approx_eq::assert_approx_eq;
use shortest_paths_core::graph::{Direction, IndexedGraph};
use shortest_paths_core::sssp::{bfs, bellman_ford, dag_sssp, dijkstra};
use shortest_paths_core::options::BellmanFordOptions;
use shortest_paths_core::weight::WeightFn;

fn relaxation_holds(graph: &IndexedGraph, weight_fn: &WeightFn, dist: &[f64]) -> bool {
    for e in 0..graph.m() {
        let (u, v) = graph.endpoints(e);
        let w = weight_fn.weight(e).unwrap();
        for &(a, b) in &[(u, v), (v, u)] {
            if dist[a].is_finite() {
                let eps = dist[a].abs().max(dist[b].abs()).max(1.0) * 1e-9;
                if dist[b] > dist[a] + w + eps {
                    return false;
                }
            }
            if graph.is_directed() {
                break;
            }
        }
    }
    true
}

#[test]
fn dijkstra_and_bellman_ford_agree_on_nonnegative_weights() {
    let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (3, 4)];
    let weights = [7.0, 9.0, 10.0, 15.0, 11.0, 2.0, 6.0];
    let g = IndexedGraph::build(5, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);

    let by_dijkstra = dijkstra(&g, &w, 0).unwrap();
    let by_bf = bellman_ford(&g, &w, 0, BellmanFordOptions::default()).unwrap();

    for v in 0..g.n() {
        let a = by_dijkstra.distance(v).unwrap();
        let b = by_bf.distance(v).unwrap();
        assert_approx_eq!(a, b, 1e-9);
    }
    assert!(relaxation_holds(&g, &w, &(0..g.n()).map(|v| by_dijkstra.distance(v).unwrap()).collect::<Vec<_>>()));
}

#[test]
fn bfs_matches_dijkstra_under_cardinality_weights() {
    let edges = [(0, 1), (1, 2), (2, 3), (0, 3)];
    let g = IndexedGraph::build(4, Direction::Undirected, &edges);
    let w = WeightFn::cardinality();

    let by_bfs = bfs(&g, 0).unwrap();
    let by_dijkstra = dijkstra(&g, &w, 0).unwrap();
    for v in 0..g.n() {
        assert_eq!(by_bfs.distance(v).unwrap(), by_dijkstra.distance(v).unwrap());
    }
}

#[test]
fn dag_sssp_agrees_with_dijkstra_on_an_acyclic_digraph() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)];
    let weights = [2.0, 1.0, 4.0, 1.0, 1.0];
    let g = IndexedGraph::build(4, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);

    let by_dag = dag_sssp(&g, &w, 0).unwrap();
    let by_dijkstra = dijkstra(&g, &w, 0).unwrap();
    for v in 0..g.n() {
        assert_eq!(by_dag.distance(v).unwrap(), by_dijkstra.distance(v).unwrap());
    }
}

#[test]
fn reconstructed_path_weight_equals_reported_distance() {
    let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)];
    let weights = [3.0, 1.0, 1.0, 4.0, 2.0];
    let g = IndexedGraph::build(4, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);

    let result = dijkstra(&g, &w, 0).unwrap();
    for v in 0..g.n() {
        if let Some(path) = result.path_to(&g, v).unwrap() {
            assert!((path.weight(&w).unwrap() - result.distance(v).unwrap()).abs() < 1e-9);
        }
    }
}

#[test]
fn scenario_1_undirected_cardinality() {
    // spec §8, scenario 1.
    let edges = [(0, 1), (1, 2), (2, 3), (0, 3)];
    let g = IndexedGraph::build(4, Direction::Undirected, &edges);
    let result = bfs(&g, 0).unwrap();
    let dist: Vec<f64> = (0..4).map(|v| result.distance(v).unwrap()).collect();
    assert_eq!(dist, vec![0.0, 1.0, 2.0, 1.0]);
    assert_eq!(result.path_to(&g, 2).unwrap().unwrap().len(), 2);
}

#[test]
fn scenario_2_directed_dijkstra() {
    // spec §8, scenario 2.
    let edges = [
        (0, 1),
        (0, 2),
        (0, 4),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
    ];
    let weights = [7.0, 9.0, 14.0, 10.0, 15.0, 11.0, 2.0, 6.0];
    let g = IndexedGraph::build(5, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);
    let result = dijkstra(&g, &w, 0).unwrap();
    let dist: Vec<f64> = (0..5).map(|v| result.distance(v).unwrap()).collect();
    assert_eq!(dist, vec![0.0, 7.0, 9.0, 20.0, 11.0]);
    assert_eq!(result.path_to(&g, 3).unwrap().unwrap().vertices(&g), vec![0, 1, 3]);
}
