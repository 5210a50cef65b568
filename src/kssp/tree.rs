//! The compressed paths tree (spec §4.6.1): a rooted arena whose
//! root-to-node chains encode already-discovered `s→t` paths by
//! sharing contiguous "local edge sequences" instead of storing each
//! path in full. `parent` pointers are arena indices rather than
//! `Option<Box<Node>>`, the same flat-adjacency shape
//! [`crate::graph::IndexedGraph`] uses for edges.
//!
//! `local_path` and `sp_suffix` are kept equal at every node: a node's
//! `sp_suffix` is set to its `local_path` at creation and the two are
//! truncated together on every [`CompressedPathsTree::split`]. The
//! spec distinguishes them to let a replacement subroutine remember a
//! longer historical suffix than the node's current (possibly
//! re-split) local path; this crate's baseline-only subroutine (see
//! `replacement.rs`) never needs that extra history, so collapsing the
//! two into one invariant is a correctness-preserving simplification,
//! not a different algorithm.
use std::collections::HashSet;

use crate::graph::IndexedGraph;
use crate::weight::WeightFn;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) parent: Option<usize>,
    pub(crate) local_path: Vec<usize>,
    pub(crate) local_source: usize,
    pub(crate) weight_to_source: f64,
    pub(crate) sp_suffix: Vec<usize>,
    pub(crate) source_used_out_edges: HashSet<usize>,
    pub(crate) best_deviation_path: Option<Vec<usize>>,
    pub(crate) best_deviation_weight: f64,
}

impl Node {
    fn leaf(local_source: usize, local_path: Vec<usize>, weight_to_source: f64) -> Node {
        let sp_suffix = local_path.clone();
        Node {
            parent: None,
            local_path,
            local_source,
            weight_to_source,
            sp_suffix,
            source_used_out_edges: HashSet::new(),
            best_deviation_path: None,
            best_deviation_weight: f64::INFINITY,
        }
    }
}

pub(crate) struct CompressedPathsTree {
    pub(crate) source: usize,
    pub(crate) nodes: Vec<Node>,
}

impl CompressedPathsTree {
    pub(crate) fn with_root(source: usize, root_path: Vec<usize>) -> Self {
        CompressedPathsTree {
            source,
            nodes: vec![Node::leaf(source, root_path, 0.0)],
        }
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Edge sequence from `s` up to, but not including, node `idx`'s
    /// own local path.
    pub(crate) fn ancestor_prefix(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cur = self.nodes[idx].parent;
        while let Some(p) = cur {
            chain.push(p);
            cur = self.nodes[p].parent;
        }
        chain.reverse();
        let mut edges = Vec::new();
        for p in chain {
            edges.extend_from_slice(&self.nodes[p].local_path);
        }
        edges
    }

    /// The full `s→t` edge sequence for node `idx` with `deviation`
    /// substituted for its own local path (spec §4.6.2 step b).
    pub(crate) fn full_path_with_deviation(&self, idx: usize, deviation: &[usize]) -> Vec<usize> {
        let mut edges = self.ancestor_prefix(idx);
        edges.extend_from_slice(deviation);
        edges
    }

    /// Every vertex visited along the ancestor prefix of `idx`, from
    /// `s` up to and including `local_source` — the already-realized
    /// prefix the replacement subroutine (spec §4.6.3) must avoid.
    pub(crate) fn ancestor_vertices(&self, graph: &IndexedGraph, idx: usize) -> Vec<usize> {
        let edges = self.ancestor_prefix(idx);
        let mut verts = Vec::with_capacity(edges.len() + 1);
        let mut cur = self.source;
        verts.push(cur);
        for e in edges {
            cur = graph.other(e, cur);
            verts.push(cur);
        }
        verts
    }

    /// Splits node `idx` at its first `split_len` edges (spec §4.6.2
    /// step d): inserts a new prefix node between `idx` and its former
    /// parent, carrying those edges, and truncates `idx` down to the
    /// remaining suffix. `split_len` may be `0`, which still inserts an
    /// (empty-path) prefix node so every branching point has a single
    /// shared parent regardless of how early the deviation diverges.
    /// Returns the new prefix node's index.
    pub(crate) fn split(&mut self, graph: &IndexedGraph, weight_fn: &WeightFn, idx: usize, split_len: usize) -> usize {
        debug_assert!(split_len <= self.nodes[idx].local_path.len());
        let old_parent = self.nodes[idx].parent;
        let old_source = self.nodes[idx].local_source;
        let old_weight_to_source = self.nodes[idx].weight_to_source;
        let prefix_path = self.nodes[idx].local_path[..split_len].to_vec();
        let prefix_sp_suffix = self.nodes[idx].sp_suffix[..split_len].to_vec();
        let used_edges = std::mem::take(&mut self.nodes[idx].source_used_out_edges);
        let prefix_weight: f64 = prefix_path
            .iter()
            .map(|&e| weight_fn.weight(e).unwrap_or(f64::NAN))
            .sum();

        let mut divergence = old_source;
        for &e in &prefix_path {
            divergence = graph.other(e, divergence);
        }

        let prefix_node = Node {
            parent: old_parent,
            local_path: prefix_path,
            local_source: old_source,
            weight_to_source: old_weight_to_source,
            sp_suffix: prefix_sp_suffix,
            source_used_out_edges: used_edges,
            best_deviation_path: None,
            best_deviation_weight: f64::INFINITY,
        };
        let prefix_idx = self.nodes.len();
        self.nodes.push(prefix_node);

        let node = &mut self.nodes[idx];
        node.parent = Some(prefix_idx);
        node.local_path = node.local_path[split_len..].to_vec();
        node.sp_suffix = node.sp_suffix[split_len..].to_vec();
        node.local_source = divergence;
        node.weight_to_source = old_weight_to_source + prefix_weight;
        node.source_used_out_edges = HashSet::new();
        node.best_deviation_path = None;
        node.best_deviation_weight = f64::INFINITY;

        prefix_idx
    }

    /// Adds a new child of `parent` (spec §4.6.2 step e).
    pub(crate) fn add_child(&mut self, parent: usize, local_source: usize, local_path: Vec<usize>, weight_to_source: f64) -> usize {
        let mut child = Node::leaf(local_source, local_path, weight_to_source);
        child.parent = Some(parent);
        let idx = self.nodes.len();
        self.nodes.push(child);
        idx
    }

    pub(crate) fn set_best_deviation(&mut self, idx: usize, deviation: Option<(Vec<usize>, f64)>) {
        match deviation {
            Some((path, weight)) => {
                self.nodes[idx].best_deviation_path = Some(path);
                self.nodes[idx].best_deviation_weight = weight;
            }
            None => {
                self.nodes[idx].best_deviation_path = None;
                self.nodes[idx].best_deviation_weight = f64::INFINITY;
            }
        }
    }

    pub(crate) fn record_used_out_edge(&mut self, idx: usize, edge: usize) {
        self.nodes[idx].source_used_out_edges.insert(edge);
    }
}
