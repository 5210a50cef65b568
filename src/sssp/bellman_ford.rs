//! Bellman-Ford for directed graphs with arbitrary (possibly negative)
//! real weights (spec §4.2.5).
//!
//! The classic/modified-frontier adaptive switch and the final
//! relax-again negative-cycle check are spelled out in spec §4.2.5;
//! `petgraph`'s own Bellman-Ford (`src/algo/pathfinding/bellman_ford.rs`)
//! is the builder-style single-mode classic variant this generalizes
//! with the frontier optimization and explicit cycle witness
//! reconstruction.
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::options::BellmanFordOptions;
use crate::path::{NegativeCycle, Path};
use crate::weight::WeightFn;

use super::{SsspError, SsspResult, NO_EDGE};

/// Bellman-Ford relaxation from `source`. `graph` must be directed.
/// Returns `SsspError::Cycle` if a negative-weight cycle reachable
/// from `source` is discovered.
pub fn bellman_ford(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    source: usize,
    options: BellmanFordOptions,
) -> Result<SsspResult, SsspError> {
    if !graph.is_directed() {
        return Err(Error::NotDirected.into());
    }
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source }.into());
    }

    let n = graph.n();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    dist[source] = 0.0;

    let threshold = (options.frontier_threshold_fraction * n as f64).ceil() as usize;
    let mut frontier: Vec<usize> = vec![source];
    let mut skip_modified_rounds: u32 = 0;
    let mut next_gap: u32 = options.frontier_gap_growth.max(2);

    for round in 0..n {
        let use_frontier = skip_modified_rounds == 0;
        if skip_modified_rounds > 0 {
            skip_modified_rounds -= 1;
        }
        log::debug!(
            "bellman-ford round {round}: mode={}",
            if use_frontier { "modified-frontier" } else { "classic" }
        );

        let mut modified = Vec::new();
        let mut relax = |e: usize, u: usize, v: usize, modified: &mut Vec<usize>| -> Result<(), Error> {
            if dist[u].is_infinite() {
                return Ok(());
            }
            let cand = dist[u] + weight_fn.weight(e)?;
            if cand < dist[v] - epsilon(cand, dist[v]) {
                dist[v] = cand;
                backtrack[v] = e as i64;
                modified.push(v);
            }
            Ok(())
        };

        if use_frontier {
            for &u in &frontier {
                for &e in graph.out_edges(u) {
                    let v = graph.dst(e);
                    relax(e, u, v, &mut modified)?;
                }
            }
        } else {
            for e in 0..graph.m() {
                let (u, v) = graph.endpoints(e);
                relax(e, u, v, &mut modified)?;
            }
        }

        if modified.is_empty() {
            break;
        }
        if modified.len() > threshold {
            skip_modified_rounds = next_gap;
            next_gap = next_gap.saturating_mul(options.frontier_gap_growth.max(2));
        } else {
            next_gap = options.frontier_gap_growth.max(2);
        }
        modified.sort_unstable();
        modified.dedup();
        frontier = modified;
    }

    // Final pass: if any edge can still relax, a negative cycle is reachable.
    for e in 0..graph.m() {
        let (u, v) = graph.endpoints(e);
        if dist[u].is_infinite() {
            continue;
        }
        let cand = dist[u] + weight_fn.weight(e)?;
        if cand < dist[v] - epsilon(cand, dist[v]) {
            let witness = reconstruct_cycle(&backtrack, graph, v, n);
            return Err(NegativeCycle(witness).into());
        }
    }

    Ok(SsspResult::new(source, dist, backtrack))
}

fn epsilon(a: f64, b: f64) -> f64 {
    a.abs().max(b.abs()).max(1.0) * 1e-9
}

/// Walks `backtrack` edges from `start` until a vertex repeats, which
/// closes a negative cycle (spec §4.2.5).
fn reconstruct_cycle(backtrack: &[i64], graph: &IndexedGraph, start: usize, n: usize) -> Path {
    let mut cur = start;
    // n steps guarantees landing inside the cycle itself.
    for _ in 0..n {
        let e = backtrack[cur];
        debug_assert_ne!(e, NO_EDGE);
        cur = graph.other(e as usize, cur);
    }
    let cycle_start = cur;
    let mut edges = Vec::new();
    loop {
        let e = backtrack[cur] as usize;
        edges.push(e);
        cur = graph.other(e, cur);
        if cur == cycle_start {
            break;
        }
    }
    edges.reverse();
    Path::new(cycle_start, cycle_start, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn scenario_3_negative_edges_valid_potential() {
        // spec §8, scenario 3.
        let edges = [(0, 1), (1, 2), (2, 3), (0, 3)];
        let weights = [1.0, -2.0, 2.0, 4.0];
        let g = IndexedGraph::build(4, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let result = bellman_ford(&g, &w, 0, BellmanFordOptions::default()).unwrap();
        assert_eq!(
            (0..4).map(|v| result.distance(v).unwrap()).collect::<Vec<_>>(),
            vec![0.0, 1.0, -1.0, 1.0]
        );
    }

    #[test]
    fn scenario_4_detects_negative_cycle() {
        // spec §8, scenario 4.
        let edges = [(0, 1), (1, 2), (2, 0)];
        let weights = [1.0, -1.0, -1.0];
        let g = IndexedGraph::build(3, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let err = bellman_ford(&g, &w, 0, BellmanFordOptions::default()).unwrap_err();
        match err {
            SsspError::Cycle(cycle) => {
                let witness = cycle.witness();
                assert_eq!(witness.source(), witness.target());
                assert_eq!(witness.len(), 3);
                assert!(witness.weight(&w).unwrap() < 0.0);
            }
            SsspError::Structural(_) => panic!("expected negative cycle"),
        }
    }

    #[test]
    fn rejects_undirected_graphs() {
        let g = IndexedGraph::build(2, Direction::Undirected, &[(0, 1)]);
        let w = WeightFn::cardinality();
        assert_eq!(
            bellman_ford(&g, &w, 0, BellmanFordOptions::default()),
            Err(SsspError::Structural(Error::NotDirected))
        );
    }
}
