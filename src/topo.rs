//! [`topo_order`]: Kahn-style topological ordering of a DAG (spec §2, §4.2.4).
//!
//! `petgraph`'s own `toposort` (`crates/algorithms/src/dag/toposort.rs`)
//! is DFS-based with an explicit stack. Spec §2 calls for a
//! "Kahn-style linear topological order" instead, which this crate
//! follows literally: track in-degrees and repeatedly peel off
//! zero-in-degree vertices through a FIFO queue.
use std::collections::VecDeque;

use crate::error::Error;
use crate::graph::IndexedGraph;

/// Computes a topological order of `graph`, which must be directed.
///
/// Returns `Error::NotDirected` if the graph is undirected, or
/// `Error::HasCycle` if it is not acyclic (a self-loop always counts
/// as a cycle).
pub fn topo_order(graph: &IndexedGraph) -> Result<Vec<usize>, Error> {
    if !graph.is_directed() {
        return Err(Error::NotDirected);
    }
    if !graph.self_edges().is_empty() {
        return Err(Error::HasCycle);
    }

    let n = graph.n();
    let mut in_degree = vec![0usize; n];
    for v in 0..n {
        for &e in graph.out_edges(v) {
            in_degree[graph.dst(e)] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &e in graph.out_edges(v) {
            let w = graph.dst(e);
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() != n {
        return Err(Error::HasCycle);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn orders_a_dag() {
        let g = IndexedGraph::build(
            4,
            Direction::Directed,
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
        );
        let order = topo_order(&g).unwrap();
        let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
        assert!(pos(0) < pos(1));
        assert!(pos(0) < pos(2));
        assert!(pos(1) < pos(3));
        assert!(pos(2) < pos(3));
    }

    #[test]
    fn detects_cycle() {
        let g = IndexedGraph::build(3, Direction::Directed, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(topo_order(&g), Err(Error::HasCycle));
    }

    #[test]
    fn rejects_undirected_graphs() {
        let g = IndexedGraph::build(2, Direction::Undirected, &[(0, 1)]);
        assert_eq!(topo_order(&g), Err(Error::NotDirected));
    }
}
