//! Bidirectional-meet shortest path for non-negative weights (spec §4.4.1).
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::heap::IndexedHeap;
use crate::path::Path;
use crate::sssp::NO_EDGE;
use crate::weight::WeightFn;

use super::{reconstruct_forward, walk_toward, StPath};

/// Runs forward and backward Dijkstra searches in alternation, tracking
/// the best-known `dist_f[v] + dist_b[v]` over vertices settled by
/// either side, and stops once neither frontier can improve on it.
pub fn bidirectional(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    s: usize,
    t: usize,
) -> Result<Option<StPath>, Error> {
    let n = graph.n();
    if s >= n {
        return Err(Error::NoSuchVertex { index: s });
    }
    if t >= n {
        return Err(Error::NoSuchVertex { index: t });
    }
    if s == t {
        return Ok(Some(StPath::new(0.0, Path::new(s, t, Vec::new()))));
    }

    let mut dist_f = vec![f64::INFINITY; n];
    let mut dist_b = vec![f64::INFINITY; n];
    let mut backtrack_f = vec![NO_EDGE; n];
    let mut backtrack_b = vec![NO_EDGE; n];
    let mut settled_f = vec![false; n];
    let mut settled_b = vec![false; n];
    dist_f[s] = 0.0;
    dist_b[t] = 0.0;

    let mut heap_f: IndexedHeap<f64> = IndexedHeap::new(n);
    let mut heap_b: IndexedHeap<f64> = IndexedHeap::new(n);
    heap_f.insert(s, 0.0);
    heap_b.insert(t, 0.0);

    let mut mu = f64::INFINITY;
    let mut middle: Option<usize> = None;

    loop {
        let top_f = heap_f.peek_min().map(|(_, k)| k).unwrap_or(f64::INFINITY);
        let top_b = heap_b.peek_min().map(|(_, k)| k).unwrap_or(f64::INFINITY);
        if top_f.is_infinite() && top_b.is_infinite() {
            break;
        }
        if top_f + top_b >= mu {
            break;
        }

        if let Some((u, du)) = heap_f.extract_min() {
            if !settled_f[u] {
                settled_f[u] = true;
                if settled_b[u] {
                    let cand = du + dist_b[u];
                    if cand < mu {
                        mu = cand;
                        middle = Some(u);
                    }
                }
                for &e in graph.out_edges(u) {
                    let v = graph.other(e, u);
                    if settled_f[v] {
                        continue;
                    }
                    let w = weight_fn.weight(e)?;
                    if w < 0.0 {
                        return Err(Error::NegativeEdgeWeight { edge: e });
                    }
                    let cand = du + w;
                    if cand < dist_f[v] {
                        dist_f[v] = cand;
                        backtrack_f[v] = e as i64;
                        heap_f.push_or_decrease(v, cand);
                    }
                }
            }
        }

        if let Some((u, du)) = heap_b.extract_min() {
            if !settled_b[u] {
                settled_b[u] = true;
                if settled_f[u] {
                    let cand = dist_f[u] + du;
                    if cand < mu {
                        mu = cand;
                        middle = Some(u);
                    }
                }
                for &e in graph.in_edges(u) {
                    let v = graph.other(e, u);
                    if settled_b[v] {
                        continue;
                    }
                    let w = weight_fn.weight(e)?;
                    if w < 0.0 {
                        return Err(Error::NegativeEdgeWeight { edge: e });
                    }
                    let cand = du + w;
                    if cand < dist_b[v] {
                        dist_b[v] = cand;
                        backtrack_b[v] = e as i64;
                        heap_b.push_or_decrease(v, cand);
                    }
                }
            }
        }
    }

    let Some(middle) = middle else {
        return Ok(None);
    };

    let mut edges = reconstruct_forward(&backtrack_f, graph, s, middle);
    edges.extend(walk_toward(&backtrack_b, graph, t, middle));
    Ok(Some(StPath::new(mu, Path::new(s, t, edges))))
}
