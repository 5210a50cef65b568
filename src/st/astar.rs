//! A* with an externally supplied admissible heuristic (spec §4.4.2).
//!
//! Grounded on `petgraph::algo::astar` (`src/algo/astar.rs`): a
//! Dijkstra variant keyed on `dist[v] + h(v)` with closed-set pruning;
//! this crate's version swaps the generic `Measure` bound for
//! [`crate::weight::WeightFn`] and [`crate::heap::IndexedHeap`].
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::heap::IndexedHeap;
use crate::path::Path;
use crate::sssp::NO_EDGE;
use crate::weight::WeightFn;

use super::{reconstruct_forward, StPath};

/// `heuristic(v)` must be non-negative, admissible (never overestimates
/// the true remaining distance to `t`) and consistent for the standard
/// closed-set pruning to remain optimal; an inadmissible heuristic
/// still terminates but is not guaranteed to return the shortest path.
pub fn astar(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    s: usize,
    t: usize,
    heuristic: impl Fn(usize) -> f64,
) -> Result<Option<StPath>, Error> {
    let n = graph.n();
    if s >= n {
        return Err(Error::NoSuchVertex { index: s });
    }
    if t >= n {
        return Err(Error::NoSuchVertex { index: t });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    let mut settled = vec![false; n];
    dist[s] = 0.0;

    let mut heap: IndexedHeap<f64> = IndexedHeap::new(n);
    heap.insert(s, heuristic(s));

    while let Some((u, _)) = heap.extract_min() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        if u == t {
            break;
        }
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if settled[v] {
                continue;
            }
            let w = weight_fn.weight(e)?;
            if w < 0.0 {
                return Err(Error::NegativeEdgeWeight { edge: e });
            }
            let cand = dist[u] + w;
            if cand < dist[v] {
                dist[v] = cand;
                backtrack[v] = e as i64;
                heap.push_or_decrease(v, cand + heuristic(v));
            }
        }
    }

    if dist[t].is_infinite() {
        return Ok(None);
    }
    let edges = reconstruct_forward(&backtrack, graph, s, t);
    Ok(Some(StPath::new(dist[t], Path::new(s, t, edges))))
}
