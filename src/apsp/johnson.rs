//! Johnson's algorithm: potential-based all-pairs shortest paths that
//! reuses per-source Dijkstra (spec §4.3.2).
//!
//! Grounded on `petgraph::algo::johnson` (`src/algo/johnson.rs`): a
//! single SPFA/Bellman-Ford pass from a virtual zero-weight-edged
//! super-source produces the potential, then one Dijkstra per source
//! runs on the reweighted graph. Unlike the teacher, per-source work
//! here is expressed over plain `f64` weight slices rather than the
//! `WeightFn` wrapper, so it stays `Send`/`Sync` and can be hopped onto
//! `rayon`'s pool behind the `parallel` feature (spec §5) without the
//! `Rc`-based closure in [`crate::weight::WeightFn`] getting in the way.
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::heap::IndexedHeap;
use crate::options::JohnsonOptions;
use crate::path::{NegativeCycle, Path};
use crate::potential::Potential;
use crate::sssp::{SsspResult, NO_EDGE};
use crate::weight::WeightFn;

use super::{ApspError, ApspResult};

const EPS: f64 = 1e-9;

/// All-pairs shortest paths via Johnson's algorithm, restricted to
/// `sources` if given (otherwise every vertex).
pub fn johnson(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    sources: Option<&[usize]>,
    options: JohnsonOptions,
) -> Result<ApspResult, ApspError> {
    let n = graph.n();
    let directed = graph.is_directed();
    let raw: Vec<f64> = (0..graph.m())
        .map(|e| weight_fn.weight(e))
        .collect::<Result<_, _>>()?;

    for e in 0..graph.m() {
        if !directed && raw[e] < 0.0 {
            let (s, _) = graph.endpoints(e);
            return Err(NegativeCycle(Path::new(s, s, vec![e, e])).into());
        }
    }

    let has_negative = raw.iter().any(|&w| w < 0.0);
    let potential = if has_negative {
        Some(compute_potentials(graph, &raw)?)
    } else {
        None
    };

    let effective: Vec<f64> = match &potential {
        None => raw.clone(),
        Some(pot) => (0..graph.m())
            .map(|e| {
                let (u, v) = graph.endpoints(e);
                pot.reweight(u, v, raw[e])
            })
            .collect(),
    };

    let source_list: Vec<usize> = sources.map(<[usize]>::to_vec).unwrap_or_else(|| (0..n).collect());
    log::debug!(
        "johnson: {} sources, negative weights = {has_negative}",
        source_list.len()
    );

    let reduced_results = run_sources(graph, &effective, &source_list, options.parallel_threshold);

    let results = reduced_results
        .into_iter()
        .map(|r| match &potential {
            None => r,
            Some(pot) => correct(r, pot),
        })
        .collect();

    Ok(ApspResult::by_source(source_list, results))
}

fn correct(result: SsspResult, potential: &Potential) -> SsspResult {
    let s = result.source();
    let n = result.n();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    for v in 0..n {
        if let Ok(d) = result.distance(v) {
            if d.is_finite() {
                dist[v] = potential.correct_distance(s, v, d);
            }
        }
        if let Ok(Some(e)) = result.backtrack(v) {
            backtrack[v] = e as i64;
        }
    }
    SsspResult::new(s, dist, backtrack)
}

#[cfg(feature = "parallel")]
fn run_sources(
    graph: &IndexedGraph,
    effective: &[f64],
    sources: &[usize],
    threshold: usize,
) -> Vec<SsspResult> {
    use rayon::prelude::*;
    if sources.len() >= threshold {
        sources.par_iter().map(|&s| dijkstra_on_weights(graph, effective, s)).collect()
    } else {
        sources.iter().map(|&s| dijkstra_on_weights(graph, effective, s)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_sources(
    graph: &IndexedGraph,
    effective: &[f64],
    sources: &[usize],
    _threshold: usize,
) -> Vec<SsspResult> {
    sources.iter().map(|&s| dijkstra_on_weights(graph, effective, s)).collect()
}

/// A specialization of [`crate::sssp::dijkstra::dijkstra`] over a raw
/// non-negative weight slice instead of a [`WeightFn`], so the
/// `parallel` feature's per-source tasks need not share the
/// `Rc`-based weight closure across threads.
fn dijkstra_on_weights(graph: &IndexedGraph, weights: &[f64], source: usize) -> SsspResult {
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
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if settled[v] {
                continue;
            }
            let w = weights[e];
            debug_assert!(w >= -EPS, "johnson: reweighted edge {e} still negative");
            let cand = du + w.max(0.0);
            if cand < dist[v] {
                dist[v] = cand;
                backtrack[v] = e as i64;
                heap.push_or_decrease(v, cand);
            }
        }
    }

    SsspResult::new(source, dist, backtrack)
}

/// Computes `π` via a Bellman-Ford pass from a virtual zero-weight
/// super-source (spec §4.3.2), detecting any negative cycle reachable
/// from it — which is to say, reachable from anywhere.
fn compute_potentials(graph: &IndexedGraph, raw: &[f64]) -> Result<Potential, ApspError> {
    let n = graph.n();
    let mut h = vec![0.0f64; n];
    let mut backtrack = vec![NO_EDGE; n];

    for _ in 0..n {
        let mut changed = false;
        for e in 0..graph.m() {
            let (u, v) = graph.endpoints(e);
            let cand = h[u] + raw[e];
            if cand < h[v] - EPS {
                h[v] = cand;
                backtrack[v] = e as i64;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for e in 0..graph.m() {
        let (u, v) = graph.endpoints(e);
        if h[u] + raw[e] < h[v] - EPS {
            let (cycle_start, edges) = reconstruct_cycle(&backtrack, graph, v, n);
            return Err(ApspError::Cycle(NegativeCycle(Path::new(
                cycle_start,
                cycle_start,
                edges,
            ))));
        }
    }

    Ok(Potential::new(h))
}

fn reconstruct_cycle(
    backtrack: &[i64],
    graph: &IndexedGraph,
    start: usize,
    n: usize,
) -> (usize, Vec<usize>) {
    let mut cur = start;
    for _ in 0..n {
        let e = backtrack[cur];
        debug_assert_ne!(e, NO_EDGE);
        cur = graph.other(e as usize, cur);
    }
    let cycle_start = cur;
    let mut edges = Vec::new();
    loop {
        let e = backtrack[cur] as usize;
        edges.push(e);
        cur = graph.other(e, cur);
        if cur == cycle_start {
            break;
        }
    }
    edges.reverse();
    (cycle_start, edges)
}
