//! The replacement subroutine (spec §4.6.3): for a node `N` with
//! `local_source = u`, find the shortest simple `u→t` path that
//! differs from `N.sp_suffix` in at least one edge and avoids both the
//! already-realized ancestor prefix and the first-deviation edges
//! already claimed by `N`'s siblings.
//!
//! Spec §4.6.3 names three interchangeable strategies: baseline,
//! undirected-fast (Katoh-Ibaraki-Mine), and directed-fast
//! (Hershberger-Maxel-Suri). Only baseline is implemented here; the two
//! fast variants are not built in this crate. See `DESIGN.md` for the
//! tradeoff this leaves on the table (baseline re-runs the S-T engine
//! once per deviation point instead of a single two-trees sweep).
use crate::bitmap::Bitmap;
use crate::graph::IndexedGraph;
use crate::st::bidirectional;
use crate::weight::WeightFn;

use super::tree::CompressedPathsTree;

pub(super) fn best_deviation(
    graph: &IndexedGraph,
    weight_fn: &WeightFn,
    tree: &CompressedPathsTree,
    node_idx: usize,
    t: usize,
) -> Option<(Vec<usize>, f64)> {
    let node = tree.node(node_idx);
    let u = node.local_source;
    if node.local_path.is_empty() || u == t {
        return None;
    }

    let ancestor_verts = tree.ancestor_vertices(graph, node_idx);
    let mut mask = Bitmap::new(graph.m());
    // Every vertex on the ancestor prefix strictly before `u` is
    // removed from consideration by masking all its incident edges.
    for &v in &ancestor_verts[..ancestor_verts.len().saturating_sub(1)] {
        for &e in graph.out_edges(v) {
            mask.set(e);
        }
        for &e in graph.in_edges(v) {
            mask.set(e);
        }
    }

    let first_edge = node.local_path[0];
    if let Some(parent) = node.parent {
        for &e in &tree.node(parent).source_used_out_edges {
            if e != first_edge {
                mask.set(e);
            }
        }
    }

    let mut best: Option<(Vec<usize>, f64)> = None;
    for &deviation_edge in &node.sp_suffix {
        let mut trial = mask.clone();
        trial.set(deviation_edge);
        let masked = masked_weight(weight_fn, &trial);
        let Ok(found) = bidirectional(graph, &masked, u, t) else {
            continue;
        };
        let Some(candidate) = found else {
            continue;
        };
        let Ok(deviation_weight) = candidate.path().weight(weight_fn) else {
            continue;
        };
        if deviation_weight.is_infinite() {
            continue;
        }
        let total = node.weight_to_source + deviation_weight;
        if best.as_ref().map_or(true, |(_, w)| total < *w) {
            best = Some((candidate.path().edges().to_vec(), total));
        }
    }
    best
}

fn masked_weight(weight_fn: &WeightFn, mask: &Bitmap) -> WeightFn {
    let weight_fn = weight_fn.clone();
    let mask = mask.clone();
    WeightFn::real(move |e| {
        if mask.is_set(e) {
            f64::INFINITY
        } else {
            weight_fn.weight(e).unwrap_or(f64::NAN)
        }
    })
}
