//! Tunable constants, one small `Options` struct per component that
//! spec.md names a configurable threshold for (SPEC_FULL.md §C).
//!
//! Grounded on the builder-style per-call configuration of
//! `petgraph`'s `src/algo/pathfinding/{bellman_ford,astar,dijkstra}.rs`:
//! rather than a global config file (a Non-goal, spec §1/§6), each
//! tunable is a plain struct with a `Default` impl that the caller may
//! override inline.

/// Dial's algorithm dispatch hint (spec §4.2.3).
#[derive(Clone, Copy, Debug)]
pub struct DialOptions {
    /// An upper bound `D` on the distances Dial will need to bucket.
    /// When known and small relative to `m + n log n`, the SSSP
    /// dispatcher prefers Dial over Dijkstra.
    pub max_distance_bound: Option<u64>,
}

impl Default for DialOptions {
    fn default() -> Self {
        DialOptions {
            max_distance_bound: None,
        }
    }
}

/// Bellman-Ford's classic/modified-frontier switch heuristic (spec
/// §4.2.5, §9(b) — "a performance tuning, not a correctness boundary").
#[derive(Clone, Copy, Debug)]
pub struct BellmanFordOptions {
    /// If the modified set after a round exceeds this fraction of `n`,
    /// fall back to classic mode for a doubling gap of rounds.
    pub frontier_threshold_fraction: f64,
    /// Initial gap (in rounds) to skip modified-frontier mode once the
    /// threshold is exceeded; doubles each time it is exceeded again.
    pub frontier_gap_growth: u32,
}

impl Default for BellmanFordOptions {
    fn default() -> Self {
        BellmanFordOptions {
            frontier_threshold_fraction: 0.25,
            frontier_gap_growth: 2,
        }
    }
}

/// Johnson APSP's sequential/parallel dispatch (spec §4.3.2, §5).
#[derive(Clone, Copy, Debug)]
pub struct JohnsonOptions {
    /// Minimum number of sources before per-source Dijkstra calls are
    /// dispatched to a work-stealing pool instead of run sequentially.
    pub parallel_threshold: usize,
}

impl Default for JohnsonOptions {
    fn default() -> Self {
        JohnsonOptions {
            parallel_threshold: 32,
        }
    }
}

/// K-shortest-simple-paths replacement subroutine dispatch (spec
/// §4.6.3). This release only implements the baseline replacement
/// subroutine (see `DESIGN.md`); `baseline_threshold` is retained on
/// the struct so the dispatch point spec §4.6.3 describes exists in
/// the public API, but it currently has no effect since there is no
/// fast variant to switch away from.
#[derive(Clone, Copy, Debug)]
pub struct KSimplePathsOptions {
    /// Below this path length, spec §4.6.3 calls for always using the
    /// baseline replacement subroutine rather than a fast two-SP-trees
    /// variant. Unused in this release: baseline always runs.
    pub baseline_threshold: usize,
}

impl Default for KSimplePathsOptions {
    fn default() -> Self {
        KSimplePathsOptions {
            baseline_threshold: 50,
        }
    }
}
