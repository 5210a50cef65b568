//! Floyd-Warshall all-pairs shortest paths (spec §4.3.1).
//!
//! Grounded on `petgraph::algo::floyd_warshall` (`src/algo/floyd_warshall.rs`):
//! same triple-nested `k, u, v` relaxation and same per-`k` negative-cycle
//! probe, adapted to this crate's dense-indexed graph, [`DistanceMatrix`]
//! triangle packing for undirected graphs, and first-edge (rather than
//! predecessor-vertex) path reconstruction.
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::path::{NegativeCycle, Path};
use crate::sssp::NO_EDGE;
use crate::weight::WeightFn;

use super::{ApspError, ApspResult, DistanceMatrix};

const EPS: f64 = 1e-9;

fn tolerant_less(a: f64, b: f64) -> bool {
    a < b - a.abs().max(b.abs()).max(1.0) * EPS
}

/// Dense all-pairs shortest paths via Floyd-Warshall.
pub fn floyd_warshall(graph: &IndexedGraph, weight_fn: &WeightFn) -> Result<ApspResult, ApspError> {
    let n = graph.n();
    let directed = graph.is_directed();

    // A negative-weight self-loop is a one-edge negative cycle, regardless
    // of direction; an undirected negative edge of any kind is too (walk
    // it forward then back). Catch both before doing any relaxation.
    for e in 0..graph.m() {
        let (s, d) = graph.endpoints(e);
        let w = weight_fn.weight(e)?;
        if s == d && w < 0.0 {
            return Err(NegativeCycle(Path::new(s, s, vec![e])).into());
        }
        if !directed && w < 0.0 {
            return Err(NegativeCycle(Path::new(s, s, vec![e, e])).into());
        }
    }

    let mut dist = if directed {
        DistanceMatrix::full(n, f64::INFINITY)
    } else {
        DistanceMatrix::triangle(n, f64::INFINITY)
    };
    let mut first_edge = vec![NO_EDGE; n * n];

    for v in 0..n {
        if directed {
            dist.set(v, v, 0.0);
        }
    }

    for e in 0..graph.m() {
        let (s, d) = graph.endpoints(e);
        if s == d {
            continue;
        }
        let w = weight_fn.weight(e)?;
        if w < dist.get(s, d) {
            dist.set(s, d, w);
            first_edge[s * n + d] = e as i64;
            if !directed {
                first_edge[d * n + s] = e as i64;
            }
        }
    }

    for k in 0..n {
        for u in 0..n {
            let d_uk = dist.get(u, k);
            if d_uk.is_infinite() {
                continue;
            }
            for v in 0..n {
                let cand = d_uk + dist.get(k, v);
                if tolerant_less(cand, dist.get(u, v)) {
                    dist.set(u, v, cand);
                    first_edge[u * n + v] = first_edge[u * n + k];
                }
            }
        }

        if directed {
            for u in 0..n {
                let sum = dist.get(u, k) + dist.get(k, u);
                if sum < -EPS {
                    let mut edges = reconstruct(&first_edge, graph, n, u, k);
                    edges.extend(reconstruct(&first_edge, graph, n, k, u));
                    return Err(NegativeCycle(Path::new(u, u, edges)).into());
                }
            }
        }
    }

    Ok(ApspResult::dense(n, dist, first_edge))
}

fn reconstruct(first_edge: &[i64], graph: &IndexedGraph, n: usize, u: usize, v: usize) -> Vec<usize> {
    let mut edges = Vec::new();
    let mut cur = u;
    let mut guard = 0usize;
    while cur != v {
        let e = first_edge[cur * n + v];
        debug_assert_ne!(e, NO_EDGE);
        let e = e as usize;
        edges.push(e);
        cur = graph.other(e, cur);
        guard += 1;
        debug_assert!(guard <= n);
    }
    edges
}
