//! Dial's algorithm: bucket-indexed SSSP for non-negative integer
//! weights (spec §4.2.3).
use crate::dial::DialQueue;
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::options::DialOptions;
use crate::weight::WeightFn;

use super::{SsspResult, NO_EDGE};

/// Dial's algorithm: relaxation driven by [`crate::dial::DialQueue`]
/// instead of a comparison-based heap. `O(n + m + D)` where `D` is the
/// largest distance reached.
pub fn dial(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    source: usize,
    options: DialOptions,
) -> Result<SsspResult, Error> {
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source });
    }
    let n = graph.n();
    let mut dist_int = vec![i64::MAX; n];
    let mut backtrack = vec![NO_EDGE; n];
    let mut settled = vec![false; n];
    dist_int[source] = 0;

    let bound = options
        .max_distance_bound
        .unwrap_or_else(|| estimate_bound(graph, weight_fn));
    let mut queue = DialQueue::new(n, bound);
    queue.insert(source, 0);

    while let Some((u, du)) = queue.extract_min() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if settled[v] {
                continue;
            }
            let w = weight_fn
                .weight_int(e)
                .ok_or(Error::NonIntegerWeight { edge: e })?;
            if w < 0 {
                return Err(Error::NegativeEdgeWeight { edge: e });
            }
            let cand = (du as i64) + w;
            let cand = cand as u64;
            if (cand as i64) < dist_int[v] {
                dist_int[v] = cand as i64;
                backtrack[v] = e as i64;
                if queue.contains(v) {
                    queue.decrease_key(v, cand);
                } else {
                    queue.insert(v, cand);
                }
            }
        }
    }

    let dist = dist_int
        .into_iter()
        .map(|d| if d == i64::MAX { f64::INFINITY } else { d as f64 })
        .collect();
    Ok(SsspResult::new(source, dist, backtrack))
}

fn estimate_bound(graph: &IndexedGraph, weight_fn: &WeightFn) -> u64 {
    let max_w = (0..graph.m())
        .filter_map(|e| weight_fn.weight_int(e))
        .max()
        .unwrap_or(1)
        .max(1) as u64;
    max_w.saturating_mul(graph.n() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn agrees_with_unit_weight_bfs_distances() {
        let g = IndexedGraph::build(4, Direction::Undirected, &[(0, 1), (1, 2), (2, 3)]);
        let w = WeightFn::integer(|_| 1);
        let options = DialOptions {
            max_distance_bound: Some(10),
        };
        let result = dial(&g, &w, 0, options).unwrap();
        assert_eq!(
            (0..4).map(|v| result.distance(v).unwrap()).collect::<Vec<_>>(),
            vec![0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn rejects_non_integer_weight_function() {
        let g = IndexedGraph::build(2, Direction::Directed, &[(0, 1)]);
        let w = WeightFn::real(|_| 1.5);
        assert_eq!(
            dial(&g, &w, 0, DialOptions::default()),
            Err(Error::NonIntegerWeight { edge: 0 })
        );
    }
}
