//! Layered BFS for cardinality (unit-weight) SSSP (spec §4.2.1).
use std::collections::VecDeque;

use crate::error::Error;
use crate::graph::IndexedGraph;

use super::{SsspResult, NO_EDGE};

/// Layered breadth-first search from `source`. `dist[v]` is the layer
/// in which `v` is first discovered; linear time.
pub fn bfs(graph: &IndexedGraph, source: usize) -> Result<SsspResult, Error> {
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source });
    }
    let n = graph.n();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    dist[source] = 0.0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if dist[v].is_infinite() {
                dist[v] = dist[u] + 1.0;
                backtrack[v] = e as i64;
                queue.push_back(v);
            }
        }
    }

    Ok(SsspResult::new(source, dist, backtrack))
}
