//! Single-pair S-T shortest path (spec §4.4): bidirectional meet-in-the-
//! middle and A* with an external heuristic, sharing one result shape.
mod astar;
mod bidirectional;

pub use astar::astar;
pub use bidirectional::bidirectional;

use crate::graph::IndexedGraph;
use crate::path::Path;

/// The result of a single-pair query: the shortest distance and its
/// reconstructed path. `None` from either engine means `t` is
/// unreachable from `s`.
#[derive(Clone, Debug, PartialEq)]
pub struct StPath {
    distance: f64,
    path: Path,
}

impl StPath {
    pub(crate) fn new(distance: f64, path: Path) -> Self {
        StPath { distance, path }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Walks `backtrack` from `v` back to `source`, then reverses — the
/// same reconstruction [`crate::sssp::SsspResult::path_to`] performs,
/// duplicated here since the S-T engines keep their own local arrays
/// rather than building a full [`crate::sssp::SsspResult`].
pub(crate) fn reconstruct_forward(
    backtrack: &[i64],
    graph: &IndexedGraph,
    source: usize,
    v: usize,
) -> Vec<usize> {
    let mut edges = Vec::new();
    let mut cur = v;
    let mut guard = 0usize;
    while cur != source {
        let e = backtrack[cur];
        debug_assert_ne!(e, crate::sssp::NO_EDGE);
        let e = e as usize;
        edges.push(e);
        cur = graph.other(e, cur);
        guard += 1;
        debug_assert!(guard <= graph.n());
    }
    edges.reverse();
    edges
}

/// Walks `backtrack` from `v` toward `target`, in the direction the
/// edges already point (no reversal needed) — used for the backward
/// half of [`bidirectional`]'s reconstruction.
pub(crate) fn walk_toward(
    backtrack: &[i64],
    graph: &IndexedGraph,
    target: usize,
    v: usize,
) -> Vec<usize> {
    let mut edges = Vec::new();
    let mut cur = v;
    let mut guard = 0usize;
    while cur != target {
        let e = backtrack[cur];
        debug_assert_ne!(e, crate::sssp::NO_EDGE);
        let e = e as usize;
        edges.push(e);
        cur = graph.other(e, cur);
        guard += 1;
        debug_assert!(guard <= graph.n());
    }
    edges
}
