//! [`IndexedGraph`]: the dense-indexed graph collaborator (spec §6).
//!
//! This is explicitly a collaborator, not part of the shortest-paths
//! core itself (spec §1, "In scope"/"Explicitly out of scope"); it
//! exists only so the rest of the crate has something concrete to
//! compile and test against. Its shape mirrors the adjacency-list
//! construction in `petgraph::Graph` (`src/graph.rs`): vertices and
//! edges are dense integer ranges, edges are stored once in a flat
//! vector, and per-vertex adjacency is a vector of edge indices built
//! once at construction time.

/// Directed or undirected, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EdgeRecord {
    src: usize,
    dst: usize,
}

/// A dense-indexed, directed or undirected graph with precomputed
/// outgoing/incoming adjacency. Vertices are `[0, n())`, edges are
/// `[0, m())`. Immutable once built.
#[derive(Clone, Debug)]
pub struct IndexedGraph {
    direction: Direction,
    edges: Vec<EdgeRecord>,
    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
    self_edges: Vec<usize>,
}

impl IndexedGraph {
    /// Builds an immutable graph from a vertex count and an edge list of
    /// `(src, dst)` pairs. This is the only mutation surface the core
    /// uses (spec §6) — e.g. Johnson's auxiliary graph with an extra
    /// source vertex is built by calling this again with one more
    /// vertex and `n` zero-weight edges prepended to the caller's own
    /// weight function.
    pub fn build(n: usize, direction: Direction, edges: &[(usize, usize)]) -> IndexedGraph {
        let mut out_adj = vec![Vec::new(); n];
        let mut in_adj = vec![Vec::new(); n];
        let mut self_edges = Vec::new();
        let mut records = Vec::with_capacity(edges.len());

        for (e, &(src, dst)) in edges.iter().enumerate() {
            assert!(src < n && dst < n, "edge endpoint out of range");
            records.push(EdgeRecord { src, dst });
            out_adj[src].push(e);
            if direction == Direction::Undirected {
                if src != dst {
                    out_adj[dst].push(e);
                }
                in_adj[src].push(e);
                if src != dst {
                    in_adj[dst].push(e);
                }
            } else {
                in_adj[dst].push(e);
            }
            if src == dst {
                self_edges.push(e);
            }
        }

        IndexedGraph {
            direction,
            edges: records,
            out_adj,
            in_adj,
            self_edges,
        }
    }

    pub fn n(&self) -> usize {
        self.out_adj.len()
    }

    pub fn m(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    /// Source endpoint of a directed edge. Well-defined for undirected
    /// edges too (the endpoint the edge list recorded first), but callers
    /// on undirected graphs should generally use [`IndexedGraph::other`]
    /// instead.
    pub fn src(&self, e: usize) -> usize {
        self.edges[e].src
    }

    /// Destination endpoint of a directed edge. See [`IndexedGraph::src`].
    pub fn dst(&self, e: usize) -> usize {
        self.edges[e].dst
    }

    /// Both endpoints of an edge, directed or undirected.
    pub fn endpoints(&self, e: usize) -> (usize, usize) {
        (self.edges[e].src, self.edges[e].dst)
    }

    /// The endpoint of `e` opposite `v`. Panics if `e` is not incident to `v`.
    pub fn other(&self, e: usize, v: usize) -> usize {
        let rec = self.edges[e];
        if rec.src == v {
            rec.dst
        } else if rec.dst == v {
            rec.src
        } else {
            panic!("edge {e} is not incident to vertex {v}");
        }
    }

    /// Outgoing edges of `v` (all incident edges, for undirected graphs).
    pub fn out_edges(&self, v: usize) -> &[usize] {
        &self.out_adj[v]
    }

    /// Incoming edges of `v` (all incident edges, for undirected graphs).
    pub fn in_edges(&self, v: usize) -> &[usize] {
        &self.in_adj[v]
    }

    /// Edges whose two endpoints coincide.
    pub fn self_edges(&self) -> &[usize] {
        &self.self_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let g = IndexedGraph::build(4, Direction::Undirected, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 4);
        assert_eq!(g.out_edges(0).len(), 2);
        assert_eq!(g.out_edges(1).len(), 2);
        assert_eq!(g.other(0, 0), 1);
        assert_eq!(g.other(0, 1), 0);
    }

    #[test]
    fn directed_in_out_edges_differ() {
        let g = IndexedGraph::build(3, Direction::Directed, &[(0, 1), (1, 2)]);
        assert_eq!(g.out_edges(1), &[1]);
        assert_eq!(g.in_edges(1), &[0]);
    }

    #[test]
    fn self_loop_is_recorded_once_for_undirected() {
        let g = IndexedGraph::build(2, Direction::Undirected, &[(0, 0), (0, 1)]);
        assert_eq!(g.self_edges(), &[0]);
        assert_eq!(g.out_edges(0).len(), 2);
    }
}
