//! DAG relaxation: linear-time SSSP on a directed acyclic graph with
//! arbitrary (including negative) weights (spec §4.2.4).
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::topo::topo_order;
use crate::weight::WeightFn;

use super::{SsspResult, NO_EDGE};

/// Relaxes vertices in topological order starting from `source`'s
/// position. Requires `graph` to be directed and acyclic.
pub fn dag_sssp(graph: &IndexedGraph, weight_fn: &WeightFn, source: usize) -> Result<SsspResult, Error> {
    if source >= graph.n() {
        return Err(Error::NoSuchVertex { index: source });
    }
    let order = topo_order(graph)?;
    let n = graph.n();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    dist[source] = 0.0;

    let start = order
        .iter()
        .position(|&v| v == source)
        .expect("topo order contains every vertex");

    for &u in &order[start..] {
        if dist[u].is_infinite() {
            continue;
        }
        for &e in graph.out_edges(u) {
            let v = graph.dst(e);
            let cand = dist[u] + weight_fn.weight(e)?;
            if cand < dist[v] {
                dist[v] = cand;
                backtrack[v] = e as i64;
            }
        }
    }

    Ok(SsspResult::new(source, dist, backtrack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn handles_negative_weights_on_a_dag() {
        let g = IndexedGraph::build(
            4,
            Direction::Directed,
            &[(0, 1), (1, 2), (2, 3), (0, 3)],
        );
        let weights = [1.0, -2.0, 2.0, 4.0];
        let w = WeightFn::real(move |e| weights[e]);
        let result = dag_sssp(&g, &w, 0).unwrap();
        assert_eq!(result.distance(3).unwrap(), 1.0);
    }

    #[test]
    fn rejects_cyclic_graphs() {
        let g = IndexedGraph::build(2, Direction::Directed, &[(0, 1), (1, 0)]);
        let w = WeightFn::cardinality();
        assert_eq!(dag_sssp(&g, &w, 0), Err(Error::HasCycle));
    }
}
