//! Property tests of the spec §8 universal invariants on small random
//! graphs, complementing the literal fixtures in
//! `sssp_invariants.rs`/`apsp_invariants.rs` (SPEC_FULL.md §D). The
//! graph/weight strategy is a plain `prop::collection` composition
//! rather than an `Arbitrary` impl, since [`IndexedGraph`] is an
//! internal collaborator, not a type this crate exposes for proptest
//! to derive over — the same reason-for-a-hand-rolled-strategy
//! situation `petgraph`'s own `tests/test_proptest.rs` is in for types
//! outside its `Arbitrary` coverage.
use proptest::collection::vec as pvec;
use proptest::prelude::*;

use shortest_paths_core::apsp::floyd_warshall;
use shortest_paths_core::graph::{Direction, IndexedGraph};
use shortest_paths_core::options::BellmanFordOptions;
use shortest_paths_core::sssp::{bellman_ford, dijkstra};
use shortest_paths_core::weight::WeightFn;

const MAX_N: usize = 8;

/// A small directed graph with nonnegative integer weights, plus the
/// source vertex to run SSSP from.
fn small_nonneg_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<f64>, usize)> {
    (3..=MAX_N).prop_flat_map(|n| {
        pvec((0..n, 0..n, 1..20u32), 0..(n * 2)).prop_flat_map(move |triples| {
            let edges: Vec<(usize, usize)> = triples.iter().map(|&(a, b, _)| (a, b)).collect();
            let weights: Vec<f64> = triples.iter().map(|&(_, _, w)| w as f64).collect();
            (0..n).prop_map(move |s| (n, edges.clone(), weights.clone(), s))
        })
    })
}

proptest! {
    /// K0 (spec §8): Dijkstra and Bellman-Ford must agree on every
    /// reachable vertex's distance whenever weights are nonnegative,
    /// regardless of how the random graph is shaped.
    #[test]
    fn dijkstra_and_bellman_ford_agree_on_random_nonneg_graphs((n, edges, weights, s) in small_nonneg_graph()) {
        let g = IndexedGraph::build(n, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);

        let by_dijkstra = dijkstra(&g, &w, s).unwrap();
        let by_bf = bellman_ford(&g, &w, s, BellmanFordOptions::default()).unwrap();

        for v in 0..n {
            let a = by_dijkstra.distance(v).unwrap();
            let b = by_bf.distance(v).unwrap();
            prop_assert_eq!(a.is_infinite(), b.is_infinite());
            if a.is_finite() {
                prop_assert!((a - b).abs() < 1e-6, "mismatch at {v}: {a} vs {b}");
            }
        }
    }

    /// Triangle inequality (spec §8, K0) holds for every triple of
    /// vertices on every random nonnegative-weight graph Floyd-Warshall
    /// is run on.
    #[test]
    fn floyd_warshall_triangle_inequality_holds_on_random_graphs((n, edges, weights, _s) in small_nonneg_graph()) {
        let g = IndexedGraph::build(n, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let result = floyd_warshall(&g, &w).unwrap();

        for u in 0..n {
            for v in 0..n {
                for mid in 0..n {
                    let duv = result.distance(u, v).unwrap();
                    let dum = result.distance(u, mid).unwrap();
                    let dmv = result.distance(mid, v).unwrap();
                    if dum.is_finite() && dmv.is_finite() {
                        prop_assert!(duv <= dum + dmv + 1e-6);
                    }
                }
            }
        }
    }

    /// Every distance Dijkstra reports has a path whose reconstructed
    /// weight equals it exactly (up to floating-point tolerance) — K0's
    /// "a reported distance always has a realizing path" half.
    #[test]
    fn dijkstra_reconstructed_paths_realize_their_reported_distance((n, edges, weights, s) in small_nonneg_graph()) {
        let g = IndexedGraph::build(n, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let result = dijkstra(&g, &w, s).unwrap();

        for v in 0..n {
            if let Some(path) = result.path_to(&g, v).unwrap() {
                let reported = result.distance(v).unwrap();
                let realized = path.weight(&w).unwrap();
                prop_assert!((realized - reported).abs() < 1e-6, "{realized} vs {reported}");
            }
        }
    }
}
