//! Single-source shortest path family (spec §4.2) and its shared
//! result type (spec §3, "SSSP-Result").
mod bellman_ford;
mod bfs;
mod dag;
mod dial;
mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dag::dag_sssp;
pub use dial::dial;
pub use dijkstra::dijkstra;

use core::fmt;

use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::options::{BellmanFordOptions, DialOptions};
use crate::path::{NegativeCycle, Path};
use crate::weight::{WeightFn, WeightProfile};

/// No edge used to reach a vertex: either it is the source, or it is
/// unreachable (spec §3, I2).
pub const NO_EDGE: i64 = -1;

/// The declared or inferred shape of a call's weights and graph,
/// driving the SSSP dispatcher (spec §4.2). `IntGeneral` and
/// `RealGeneral` both dispatch to [`bellman_ford`]: the distinction is
/// kept at the profile level, matching spec §4.2's six-way
/// classification, even though this crate does not give integer
/// general weights a distinct faster strategy (see `DESIGN.md`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SsspProfile {
    Cardinality,
    NonNegInt,
    NonNegReal,
    IntGeneral,
    RealGeneral,
    Dag,
}

/// Unified failure type for the SSSP family: a structural precondition
/// failure, or a first-class negative-cycle witness (spec §4.2, §7).
#[derive(Clone, Debug, PartialEq)]
pub enum SsspError {
    Structural(Error),
    Cycle(NegativeCycle),
}

impl From<Error> for SsspError {
    fn from(e: Error) -> Self {
        SsspError::Structural(e)
    }
}

impl From<NegativeCycle> for SsspError {
    fn from(c: NegativeCycle) -> Self {
        SsspError::Cycle(c)
    }
}

impl fmt::Display for SsspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SsspError::Structural(e) => write!(f, "{e}"),
            SsspError::Cycle(c) => write!(f, "{c}"),
        }
    }
}

impl std::error::Error for SsspError {}

/// The result of a single-source shortest path computation (spec §3).
///
/// Invariants I1-I5 of spec §3 hold for every algorithm in this family
/// on success; see `tests/sssp_invariants.rs`.
#[derive(Clone, Debug)]
pub struct SsspResult {
    source: usize,
    dist: Vec<f64>,
    backtrack: Vec<i64>,
}

impl SsspResult {
    pub(crate) fn new(source: usize, dist: Vec<f64>, backtrack: Vec<i64>) -> Self {
        debug_assert_eq!(dist[source], 0.0);
        SsspResult {
            source,
            dist,
            backtrack,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn n(&self) -> usize {
        self.dist.len()
    }

    /// Shortest-path weight from the source to `v`; `+inf` if unreachable.
    pub fn distance(&self, v: usize) -> Result<f64, Error> {
        self.dist
            .get(v)
            .copied()
            .ok_or(Error::NoSuchVertex { index: v })
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.dist.get(v).is_some_and(|d| d.is_finite())
    }

    /// The edge used to reach `v` on the shortest-path tree, or `None`
    /// if `v` is the source or unreachable.
    pub fn backtrack(&self, v: usize) -> Result<Option<usize>, Error> {
        let e = *self.backtrack.get(v).ok_or(Error::NoSuchVertex { index: v })?;
        Ok(if e == NO_EDGE { None } else { Some(e as usize) })
    }

    /// Reconstructs the shortest path from the source to `v` by
    /// walking `backtrack` (spec §3, I3; SPEC_FULL.md §E). Returns
    /// `Ok(None)` if `v` is unreachable.
    pub fn path_to(&self, graph: &IndexedGraph, v: usize) -> Result<Option<Path>, Error> {
        if v >= self.dist.len() {
            return Err(Error::NoSuchVertex { index: v });
        }
        if !self.is_reachable(v) {
            return Ok(None);
        }
        let mut edges = Vec::new();
        let mut cur = v;
        let mut guard = 0usize;
        while cur != self.source {
            let e = self.backtrack[cur];
            debug_assert_ne!(e, NO_EDGE, "reachable vertex with no backtrack edge");
            let e = e as usize;
            edges.push(e);
            cur = graph.other(e, cur);
            guard += 1;
            debug_assert!(guard <= graph.n(), "backtrack cycle detected");
        }
        edges.reverse();
        Ok(Some(Path::new(self.source, v, edges)))
    }
}

/// Infers an [`SsspProfile`] from a graph and weight function when the
/// caller has not declared one explicitly (spec §4.2).
pub fn infer_profile(graph: &IndexedGraph, weight_fn: &WeightFn) -> SsspProfile {
    match weight_fn.profile() {
        WeightProfile::Cardinality => SsspProfile::Cardinality,
        WeightProfile::Integer => {
            if graph.is_directed() && is_acyclic(graph) {
                SsspProfile::Dag
            } else if has_negative_edge_int(graph, weight_fn) {
                SsspProfile::IntGeneral
            } else {
                SsspProfile::NonNegInt
            }
        }
        WeightProfile::Real => {
            if graph.is_directed() && is_acyclic(graph) {
                SsspProfile::Dag
            } else if has_negative_edge_real(graph, weight_fn) {
                SsspProfile::RealGeneral
            } else {
                SsspProfile::NonNegReal
            }
        }
    }
}

fn is_acyclic(graph: &IndexedGraph) -> bool {
    crate::topo::topo_order(graph).is_ok()
}

fn has_negative_edge_real(graph: &IndexedGraph, weight_fn: &WeightFn) -> bool {
    (0..graph.m()).any(|e| weight_fn.weight(e).is_ok_and(|w| w < 0.0))
}

fn has_negative_edge_int(graph: &IndexedGraph, weight_fn: &WeightFn) -> bool {
    (0..graph.m()).any(|e| weight_fn.weight_int(e).unwrap_or(0) < 0)
}

/// Dispatches to the concrete SSSP strategy named by `profile` (spec
/// §4.2's shared contract: `run(g, w, s) -> SSSP-Result | NegativeCycle`).
pub fn run(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    source: usize,
    profile: SsspProfile,
) -> Result<SsspResult, SsspError> {
    run_with_options(
        graph,
        weight_fn,
        source,
        profile,
        DialOptions::default(),
        BellmanFordOptions::default(),
    )
}

/// As [`run`], with explicit tuning (spec SPEC_FULL.md §C).
pub fn run_with_options(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    source: usize,
    profile: SsspProfile,
    dial_options: DialOptions,
    bf_options: BellmanFordOptions,
) -> Result<SsspResult, SsspError> {
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source }.into());
    }
    log::debug!("sssp dispatch: profile={profile:?} source={source}");
    match profile {
        SsspProfile::Cardinality => Ok(bfs(graph, source)?),
        SsspProfile::NonNegInt => {
            let m = graph.m() as u64;
            let n = graph.n() as u64;
            let log2_n = (n.max(2) as f64).log2().ceil() as u64 + 1;
            let prefer_dial = dial_options
                .max_distance_bound
                .is_some_and(|d| d < m + n * log2_n);
            if prefer_dial {
                Ok(dial(graph, weight_fn, source, dial_options)?)
            } else {
                Ok(dijkstra(graph, weight_fn, source)?)
            }
        }
        SsspProfile::NonNegReal => Ok(dijkstra(graph, weight_fn, source)?),
        SsspProfile::Dag => Ok(dag_sssp(graph, weight_fn, source)?),
        SsspProfile::IntGeneral => bellman_ford(graph, weight_fn, source, bf_options),
        SsspProfile::RealGeneral => bellman_ford(graph, weight_fn, source, bf_options),
    }
}
