//! All-pairs invariants (spec §8, "APSP invariants").
use assert_approx_eq::assert_approx_eq;
use shortest_paths_core::apsp::{floyd_warshall, johnson};
use shortest_paths_core::graph::{Direction, IndexedGraph};
use shortest_paths_core::options::JohnsonOptions;
use shortest_paths_core::weight::WeightFn;

#[test]
fn symmetric_on_undirected_graphs() {
    let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
    let weights = [1.0, 2.0, 3.0, 4.0, 5.0];
    let g = IndexedGraph::build(4, Direction::Undirected, &edges);
    let w = WeightFn::real(move |e| weights[e]);
    let result = floyd_warshall(&g, &w).unwrap();
    for u in 0..g.n() {
        for v in 0..g.n() {
            assert_eq!(result.distance(u, v).unwrap(), result.distance(v, u).unwrap());
        }
    }
}

#[test]
fn triangle_inequality_holds() {
    let edges = [(0, 1), (1, 2), (0, 2), (2, 3), (1, 3)];
    let weights = [2.0, 2.0, 10.0, 1.0, 8.0];
    let g = IndexedGraph::build(4, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);
    let result = floyd_warshall(&g, &w).unwrap();
    let n = g.n();
    for u in 0..n {
        for v in 0..n {
            for mid in 0..n {
                let duv = result.distance(u, v).unwrap();
                let dum = result.distance(u, mid).unwrap();
                let dmv = result.distance(mid, v).unwrap();
                assert!(duv <= dum + dmv + 1e-9);
            }
        }
    }
}

#[test]
fn johnson_and_floyd_warshall_agree_on_negative_edges() {
    let edges = [(0, 1), (1, 2), (2, 3), (0, 3), (1, 3)];
    let weights = [4.0, -2.0, 3.0, 10.0, 1.0];
    let g = IndexedGraph::build(4, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);

    let fw = floyd_warshall(&g, &w).unwrap();
    let jn = johnson(&g, &w, None, JohnsonOptions::default()).unwrap();

    for u in 0..g.n() {
        for v in 0..g.n() {
            let a = fw.distance(u, v).unwrap();
            let b = jn.distance(u, v).unwrap();
            if a.is_finite() && b.is_finite() {
                assert_approx_eq!(a, b, 1e-6);
            } else {
                assert_eq!(a.is_infinite(), b.is_infinite(), "mismatch ({u},{v}): {a} vs {b}");
            }
        }
    }
}

#[test]
fn path_weight_matches_reported_distance() {
    let edges = [(0, 1), (1, 2), (0, 2)];
    let weights = [1.0, 1.0, 5.0];
    let g = IndexedGraph::build(3, Direction::Directed, &edges);
    let w = WeightFn::real(move |e| weights[e]);
    let result = floyd_warshall(&g, &w).unwrap();
    let path = result.path(&g, 0, 2).unwrap().unwrap();
    assert!((path.weight(&w).unwrap() - result.distance(0, 2).unwrap()).abs() < 1e-9);
}
