//! All-pairs shortest paths (spec §4.3): Floyd-Warshall and Johnson,
//! sharing one result type and one failure union with the SSSP family.
mod floyd_warshall;
mod johnson;
mod matrix;

pub use floyd_warshall::floyd_warshall;
pub use johnson::johnson;
pub use matrix::DistanceMatrix;

use core::fmt;

use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::path::{NegativeCycle, Path};
use crate::sssp::{SsspResult, NO_EDGE};

/// Unified failure type for the APSP family, mirroring
/// [`crate::sssp::SsspError`] (spec §4.3, §7).
#[derive(Clone, Debug, PartialEq)]
pub enum ApspError {
    Structural(Error),
    Cycle(NegativeCycle),
}

impl From<Error> for ApspError {
    fn from(e: Error) -> Self {
        ApspError::Structural(e)
    }
}

impl From<NegativeCycle> for ApspError {
    fn from(c: NegativeCycle) -> Self {
        ApspError::Cycle(c)
    }
}

impl fmt::Display for ApspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApspError::Structural(e) => write!(f, "{e}"),
            ApspError::Cycle(c) => write!(f, "{c}"),
        }
    }
}

impl std::error::Error for ApspError {}

/// The result of an all-pairs computation (spec §3, "APSP-Result"):
/// either Floyd-Warshall's dense matrix plus per-pair first-hop edge,
/// or Johnson's array of per-source [`SsspResult`]s, optionally
/// restricted to a source subset.
#[derive(Clone, Debug)]
pub enum ApspResult {
    Dense {
        n: usize,
        dist: DistanceMatrix,
        first_edge: Vec<i64>,
    },
    BySource {
        sources: Vec<usize>,
        results: Vec<SsspResult>,
    },
}

impl ApspResult {
    pub(crate) fn dense(n: usize, dist: DistanceMatrix, first_edge: Vec<i64>) -> Self {
        ApspResult::Dense {
            n,
            dist,
            first_edge,
        }
    }

    pub(crate) fn by_source(sources: Vec<usize>, results: Vec<SsspResult>) -> Self {
        ApspResult::BySource { sources, results }
    }

    fn n(&self) -> usize {
        match self {
            ApspResult::Dense { n, .. } => *n,
            ApspResult::BySource { results, .. } => results.first().map(|r| r.n()).unwrap_or(0),
        }
    }

    fn source_index(&self, u: usize) -> Result<usize, Error> {
        match self {
            ApspResult::Dense { .. } => Ok(u),
            ApspResult::BySource { sources, .. } => sources
                .iter()
                .position(|&s| s == u)
                .ok_or(Error::SubsetViolation { vertex: u }),
        }
    }

    /// Shortest-path weight from `u` to `v`. Errs with
    /// [`Error::SubsetViolation`] if this is a subset [`ApspResult`]
    /// and `u` was not one of the computed sources.
    pub fn distance(&self, u: usize, v: usize) -> Result<f64, Error> {
        if u >= self.n() || v >= self.n() {
            return Err(Error::NoSuchVertex {
                index: u.max(v),
            });
        }
        match self {
            ApspResult::Dense { dist, .. } => Ok(dist.get(u, v)),
            ApspResult::BySource { .. } => {
                let idx = self.source_index(u)?;
                match self {
                    ApspResult::BySource { results, .. } => results[idx].distance(v),
                    ApspResult::Dense { .. } => unreachable!(),
                }
            }
        }
    }

    /// Reconstructs the shortest `u→v` path, or `Ok(None)` if
    /// unreachable (SPEC_FULL §E).
    pub fn path(&self, graph: &IndexedGraph, u: usize, v: usize) -> Result<Option<Path>, Error> {
        if u >= self.n() || v >= self.n() {
            return Err(Error::NoSuchVertex {
                index: u.max(v),
            });
        }
        match self {
            ApspResult::Dense { dist, first_edge, n } => {
                if dist.get(u, v).is_infinite() {
                    return Ok(None);
                }
                if u == v {
                    return Ok(Some(Path::new(u, v, Vec::new())));
                }
                let mut edges = Vec::new();
                let mut cur = u;
                let mut guard = 0usize;
                while cur != v {
                    let e = first_edge[cur * n + v];
                    debug_assert_ne!(e, NO_EDGE, "reachable pair with no first edge recorded");
                    let e = e as usize;
                    edges.push(e);
                    cur = graph.other(e, cur);
                    guard += 1;
                    debug_assert!(guard <= *n, "first-edge cycle detected");
                }
                Ok(Some(Path::new(u, v, edges)))
            }
            ApspResult::BySource { .. } => {
                let idx = self.source_index(u)?;
                match self {
                    ApspResult::BySource { results, .. } => results[idx].path_to(graph, v),
                    ApspResult::Dense { .. } => unreachable!(),
                }
            }
        }
    }
}
