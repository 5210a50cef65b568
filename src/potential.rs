//! [`Potential`]: reversible edge reweighting (spec §2, GLOSSARY).
//!
//! Used by Johnson's algorithm (spec §4.3.2) to turn a graph with
//! negative edges into one Dijkstra can run on: `w'(e) = w(e) +
//! π[src(e)] - π[dst(e)]`, which leaves every path between a fixed
//! pair of vertices shifted by the same constant `π[target] -
//! π[source]`.
use crate::graph::IndexedGraph;

/// A vertex-indexed potential array `π`, plus the forward/backward
/// transforms it induces on edge weights and path lengths.
#[derive(Clone, Debug)]
pub struct Potential {
    pi: Vec<f64>,
}

impl Potential {
    pub fn new(pi: Vec<f64>) -> Potential {
        Potential { pi }
    }

    /// Zero potential: the identity transform.
    pub fn zero(n: usize) -> Potential {
        Potential { pi: vec![0.0; n] }
    }

    pub fn get(&self, v: usize) -> f64 {
        self.pi[v]
    }

    /// `w(e) + π[src(e)] - π[dst(e)]`, given the edge's endpoints and
    /// raw weight. Never negative if `π` is valid for `w` (GLOSSARY).
    pub fn reweight(&self, src: usize, dst: usize, w: f64) -> f64 {
        w + self.pi[src] - self.pi[dst]
    }

    /// Undoes [`Potential::reweight`]'s effect on a path's total
    /// length: `dist_true(s, v) = dist'(s, v) + π[v] - π[s]`.
    pub fn correct_distance(&self, source: usize, target: usize, reweighted_dist: f64) -> f64 {
        reweighted_dist + self.pi[target] - self.pi[source]
    }

    /// Whether `π` makes every edge of `graph` non-negative under
    /// `edge_weight`, within the scale-sensitive tolerance of spec §4.2.
    pub fn is_valid_for(&self, graph: &IndexedGraph, edge_weight: impl Fn(usize) -> f64) -> bool {
        for e in 0..graph.m() {
            let (s, d) = graph.endpoints(e);
            let w = self.reweight(s, d, edge_weight(e));
            let eps = w.abs().max(1.0) * 1e-6;
            if w < -eps {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn reweight_and_correct_are_inverse_on_distances() {
        let g = IndexedGraph::build(3, Direction::Directed, &[(0, 1), (1, 2)]);
        let pot = Potential::new(vec![0.0, -1.0, -3.0]);
        let w01 = pot.reweight(0, 1, 1.0);
        let w12 = pot.reweight(1, 2, -2.0);
        let reweighted_total = w01 + w12;
        let corrected = pot.correct_distance(0, 2, reweighted_total);
        assert_eq!(corrected, 1.0 + -2.0);
        let _ = g;
    }

    #[test]
    fn zero_potential_is_identity() {
        let pot = Potential::zero(4);
        assert_eq!(pot.reweight(0, 1, 5.0), 5.0);
    }
}
