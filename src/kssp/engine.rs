//! The k-shortest-simple-paths main loop (spec §4.6.2): grow a
//! [`CompressedPathsTree`] one best-first deviation at a time,
//! emitting a new path each time the minimum-weight candidate is
//! extracted.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::options::KSimplePathsOptions;
use crate::path::Path;
use crate::st::bidirectional;
use crate::weight::WeightFn;

use super::replacement::best_deviation;
use super::tree::CompressedPathsTree;

/// Reverses the natural `f64` ordering so [`BinaryHeap`], a max-heap,
/// pops the smallest-weight candidate first — the same trick
/// `petgraph`'s `MinScored` (`src/scored.rs`) uses to turn a max-heap
/// into Dijkstra's min-heap.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Candidate(f64, usize);

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.cmp(&self.1))
    }
}

/// Up to `k` simple `s→t` paths, in non-decreasing weight order (spec
/// §4.6, invariants K1-K4). `options.baseline_threshold` is accepted
/// but unused: this release only implements the baseline replacement
/// subroutine (see `replacement.rs`), so there is no fast variant to
/// switch away from.
pub fn k_shortest_simple_paths(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    s: usize,
    t: usize,
    k: usize,
    _options: KSimplePathsOptions,
) -> Result<Vec<Path>, Error> {
    let n = graph.n();
    if s >= n {
        return Err(Error::NoSuchVertex { index: s });
    }
    if t >= n {
        return Err(Error::NoSuchVertex { index: t });
    }

    let mut results = Vec::new();
    if k == 0 {
        return Ok(results);
    }

    let Some(first) = bidirectional(graph, weight_fn, s, t)? else {
        return Ok(results);
    };
    let root_edges = first.path().edges().to_vec();
    let mut tree = CompressedPathsTree::with_root(s, root_edges.clone());
    results.push(Path::new(s, t, root_edges));
    if results.len() >= k {
        return Ok(results);
    }

    let mut queue: BinaryHeap<Candidate> = BinaryHeap::new();
    let root_deviation = best_deviation(graph, weight_fn, &tree, 0, t);
    if let Some((_, weight)) = &root_deviation {
        queue.push(Candidate(*weight, 0));
    }
    tree.set_best_deviation(0, root_deviation);

    while results.len() < k {
        let Some(Candidate(w_d, node_idx)) = queue.pop() else {
            break;
        };
        let current_weight = tree.node(node_idx).best_deviation_weight;
        if (current_weight - w_d).abs() > 1e-9 {
            // stale entry left behind by an earlier split; the live
            // candidate for this node was already (re-)enqueued.
            continue;
        }
        let Some(p_d) = tree.node(node_idx).best_deviation_path.clone() else {
            continue;
        };

        let full_edges = tree.full_path_with_deviation(node_idx, &p_d);
        results.push(Path::new(s, t, full_edges));

        let local_path = tree.node(node_idx).local_path.clone();
        let lcp = local_path
            .iter()
            .zip(p_d.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let prefix_idx = tree.split(graph, weight_fn, node_idx, lcp);
        let divergence = tree.node(node_idx).local_source;
        let node_first_edge = tree.node(node_idx).local_path[0];
        let dev_first_edge = p_d[lcp];
        tree.record_used_out_edge(prefix_idx, node_first_edge);
        tree.record_used_out_edge(prefix_idx, dev_first_edge);

        let child_path = p_d[lcp..].to_vec();
        let mut local_path_weight = 0.0;
        for &e in &tree.node(prefix_idx).local_path {
            local_path_weight += weight_fn.weight(e)?;
        }
        let child_weight_to_source = tree.node(prefix_idx).weight_to_source + local_path_weight;
        let child_idx = tree.add_child(prefix_idx, divergence, child_path, child_weight_to_source);

        for &affected in &[node_idx, prefix_idx, child_idx] {
            let deviation = best_deviation(graph, weight_fn, &tree, affected, t);
            if let Some((_, weight)) = &deviation {
                queue.push(Candidate(*weight, affected));
            }
            tree.set_best_deviation(affected, deviation);
        }

        // Spec §4.6.2 step 4: after emitting r results, keep only the
        // k-r cheapest candidates.
        let keep = k.saturating_sub(results.len());
        if queue.len() > keep {
            let mut items = queue.into_vec();
            items.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            items.truncate(keep);
            queue = items.into_iter().collect();
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;
    use crate::options::KSimplePathsOptions;

    #[test]
    fn scenario_5_three_shortest_paths_directed() {
        // spec §8, scenario 5: n=5, s=0, t=4, k=3, expects weights 4, 4, 5.
        let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (3, 4), (2, 4)];
        let weights = [1.0, 2.0, 1.0, 3.0, 1.0, 1.0, 5.0];
        let g = IndexedGraph::build(5, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let paths = k_shortest_simple_paths(&g, &w, 0, 4, 3, KSimplePathsOptions::default()).unwrap();
        assert_eq!(paths.len(), 3);
        let total_weights: Vec<f64> = paths.iter().map(|p| p.weight(&w).unwrap()).collect();
        assert_eq!(total_weights[2], 5.0);
        let mut first_two = [total_weights[0], total_weights[1]];
        first_two.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(first_two, [4.0, 4.0]);
        for p in &paths {
            assert!(p.is_simple(&g));
        }
    }

    #[test]
    fn emits_in_non_decreasing_weight_order() {
        let edges = [(0, 1), (1, 2), (0, 3), (3, 2), (0, 2)];
        let weights = [1.0, 1.0, 1.0, 2.0, 5.0];
        let g = IndexedGraph::build(4, Direction::Directed, &edges);
        let w = WeightFn::real(move |e| weights[e]);
        let paths = k_shortest_simple_paths(&g, &w, 0, 2, 3, KSimplePathsOptions::default()).unwrap();
        let ws: Vec<f64> = paths.iter().map(|p| p.weight(&w).unwrap()).collect();
        for pair in ws.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for p in &paths {
            assert!(p.is_simple(&g));
        }
    }

    #[test]
    fn fewer_than_k_simple_paths_returns_all_of_them() {
        let g = IndexedGraph::build(3, Direction::Directed, &[(0, 1), (1, 2)]);
        let w = WeightFn::cardinality();
        let paths = k_shortest_simple_paths(&g, &w, 0, 2, 5, KSimplePathsOptions::default()).unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn k_zero_returns_no_paths() {
        let g = IndexedGraph::build(2, Direction::Directed, &[(0, 1)]);
        let w = WeightFn::cardinality();
        let paths = k_shortest_simple_paths(&g, &w, 0, 1, 0, KSimplePathsOptions::default()).unwrap();
        assert!(paths.is_empty());
    }
}
