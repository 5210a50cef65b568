//! Dijkstra's algorithm for non-negative weights (spec §4.2.2).
//!
//! Grounded on `petgraph::algo::dijkstra::Dijkstra::run`
//! (`src/algo/dijkstra.rs`): pop the addressable heap's minimum,
//! relax outgoing edges, repeat. Where `petgraph` uses a
//! `BinaryHeap<MinScored<_>>` with lazy deletion against a visited
//! bitmap, this crate uses the spec's own [`crate::heap::IndexedHeap`]
//! (true `decrease_key`) since the same structure is reused by Dial
//! and Voronoi in this crate.
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::heap::IndexedHeap;
use crate::weight::WeightFn;

use super::{SsspResult, NO_EDGE};

/// Standard Dijkstra relaxation from `source`. Rejects any negative
/// edge weight observed during relaxation (spec §4.2.2).
pub fn dijkstra(graph: &IndexedGraph, weight_fn: &WeightFn, source: usize) -> Result<SsspResult, Error> {
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source });
    }
    let n = graph.n();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    let mut settled = vec![false; n];
    dist[source] = 0.0;

    let mut heap: IndexedHeap<f64> = IndexedHeap::new(n);
    heap.insert(source, 0.0);

    while let Some((u, du)) = heap.extract_min() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        log::trace!("dijkstra: settle {u} at {du}");
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if settled[v] {
                continue;
            }
            let w = weight_fn.weight(e)?;
            if w < 0.0 {
                return Err(Error::NegativeEdgeWeight { edge: e });
            }
            let cand = du + w;
            if cand < dist[v] {
                dist[v] = cand;
                backtrack[v] = e as i64;
                heap.push_or_decrease(v, cand);
            }
        }
    }

    Ok(SsspResult::new(source, dist, backtrack))
}
