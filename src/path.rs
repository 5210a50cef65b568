//! [`Path`] and the [`NegativeCycle`] witness value (spec §3).
//!
//! Grounded on `petgraph::algo::{Cycle, NegativeCycle}`
//! (`src/algo/mod.rs`): algorithm failures that carry evidence are
//! plain structs, not exceptions, and compose by being propagated as
//! `Err` values through the call chain (spec §9, "Exceptions for
//! control flow").
use core::fmt;

use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::weight::WeightFn;

/// An immutable, ordered sequence of edge indices along with the two
/// endpoints it connects. Represents a walk through the graph; whether
/// it is simple is a property callers may check with [`Path::is_simple`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    source: usize,
    target: usize,
    edges: Vec<usize>,
}

impl Path {
    /// Build a path from its endpoints and edge sequence. Does not validate
    /// that the edges actually connect `source` to `target`; callers that
    /// construct paths from algorithm internals are expected to already
    /// have established that invariant.
    pub fn new(source: usize, target: usize, edges: Vec<usize>) -> Self {
        Path {
            source,
            target,
            edges,
        }
    }

    /// The path's starting vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The path's ending vertex.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The edge indices, in traversal order.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the path has no edges (source and target coincide trivially).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of edge weights along the path, independent of whatever
    /// algorithm produced it (SPEC_FULL §E).
    pub fn weight(&self, weight_fn: &WeightFn) -> Result<f64, Error> {
        self.edges.iter().try_fold(0.0, |acc, &e| Ok(acc + weight_fn.weight(e)?))
    }

    /// Walks the ordered list of vertices implied by `edges`, given the
    /// owning graph (needed to resolve endpoints on undirected edges).
    pub fn vertices(&self, graph: &IndexedGraph) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.edges.len() + 1);
        let mut cur = self.source;
        out.push(cur);
        for &e in &self.edges {
            cur = graph.other(e, cur);
            out.push(cur);
        }
        out
    }

    /// A path is simple iff it visits every vertex at most once (spec I5, K2).
    pub fn is_simple(&self, graph: &IndexedGraph) -> bool {
        let verts = self.vertices(graph);
        let mut seen = std::collections::HashSet::with_capacity(verts.len());
        verts.into_iter().all(|v| seen.insert(v))
    }
}

/// First-class failure witness for any algorithm that discovers a
/// negative-weight cycle reachable from the scope it explored (spec §3,
/// §7). `source() == target()` by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegativeCycle(pub Path);

impl NegativeCycle {
    /// The cycle witness path. `path.source() == path.target()`.
    pub fn witness(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "negative-weight cycle through vertex {} ({} edges)",
            self.0.source(),
            self.0.len()
        )
    }
}

impl std::error::Error for NegativeCycle {}
