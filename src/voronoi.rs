//! Voronoi partition: multi-source non-negative-weight SSSP (spec §4.5).
//!
//! Grounded on [`crate::sssp::dijkstra`]: a single [`crate::heap::IndexedHeap`]
//! seeded with every site at key `0` instead of one source at key `0`,
//! with a `cell` array propagated from parent to child on relaxation
//! alongside the usual `dist`/`backtrack`.
use crate::error::Error;
use crate::graph::IndexedGraph;
use crate::heap::IndexedHeap;
use crate::path::Path;
use crate::sssp::NO_EDGE;
use crate::weight::WeightFn;

/// The result of a Voronoi partition (spec §3, "Voronoi-Result").
#[derive(Clone, Debug)]
pub struct VoronoiResult {
    sites: Vec<usize>,
    cell: Vec<usize>,
    dist: Vec<f64>,
    backtrack: Vec<i64>,
}

impl VoronoiResult {
    /// Number of sites; also the sentinel `cell` value for vertices
    /// unreachable from every site.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// The vertex seeding the `site_index`-th site.
    pub fn site_vertex(&self, site_index: usize) -> usize {
        self.sites[site_index]
    }

    pub fn n(&self) -> usize {
        self.dist.len()
    }

    /// Which site owns `v`, or [`VoronoiResult::site_count`] if `v` is
    /// unreachable from every site.
    pub fn cell(&self, v: usize) -> Result<usize, Error> {
        self.cell.get(v).copied().ok_or(Error::NoSuchVertex { index: v })
    }

    pub fn is_unreachable(&self, v: usize) -> Result<bool, Error> {
        Ok(self.cell(v)? == self.sites.len())
    }

    pub fn distance(&self, v: usize) -> Result<f64, Error> {
        self.dist.get(v).copied().ok_or(Error::NoSuchVertex { index: v })
    }

    pub fn backtrack(&self, v: usize) -> Result<Option<usize>, Error> {
        let e = *self.backtrack.get(v).ok_or(Error::NoSuchVertex { index: v })?;
        Ok(if e == NO_EDGE { None } else { Some(e as usize) })
    }

    /// Reconstructs the shortest path from `v`'s owning site to `v`.
    pub fn path_to(&self, graph: &IndexedGraph, v: usize) -> Result<Option<Path>, Error> {
        if v >= self.dist.len() {
            return Err(Error::NoSuchVertex { index: v });
        }
        if self.is_unreachable(v)? {
            return Ok(None);
        }
        let mut edges = Vec::new();
        let mut cur = v;
        let mut guard = 0usize;
        while self.backtrack[cur] != NO_EDGE {
            let e = self.backtrack[cur] as usize;
            edges.push(e);
            cur = graph.other(e, cur);
            guard += 1;
            debug_assert!(guard <= self.dist.len(), "backtrack cycle detected");
        }
        edges.reverse();
        Ok(Some(Path::new(cur, v, edges)))
    }
}

/// Multi-source SSSP from `sites`, assigning each reachable vertex to
/// the nearest site. Rejects negative edge weights and duplicate sites.
pub fn voronoi(graph: &IndexedGraph, weight_fn: &WeightFn, sites: &[usize]) -> Result<VoronoiResult, Error> {
    let n = graph.n();
    let mut seen = vec![false; n];
    for &s in sites {
        if s >= n {
            return Err(Error::NoSuchVertex { index: s });
        }
        if seen[s] {
            return Err(Error::DuplicateSite { site: s });
        }
        seen[s] = true;
    }

    let unreachable_marker = sites.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut backtrack = vec![NO_EDGE; n];
    let mut cell = vec![unreachable_marker; n];
    let mut settled = vec![false; n];

    let mut heap: IndexedHeap<f64> = IndexedHeap::new(n);
    for (i, &s) in sites.iter().enumerate() {
        dist[s] = 0.0;
        cell[s] = i;
        heap.insert(s, 0.0);
    }

    while let Some((u, du)) = heap.extract_min() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        log::trace!("voronoi: settle {u} at {du} (cell {})", cell[u]);
        for &e in graph.out_edges(u) {
            let v = graph.other(e, u);
            if settled[v] {
                continue;
            }
            let w = weight_fn.weight(e)?;
            if w < 0.0 {
                return Err(Error::NegativeEdgeWeight { edge: e });
            }
            let cand = du + w;
            if cand < dist[v] {
                dist[v] = cand;
                backtrack[v] = e as i64;
                cell[v] = cell[u];
                heap.push_or_decrease(v, cand);
            }
        }
    }

    Ok(VoronoiResult {
        sites: sites.to_vec(),
        cell,
        dist,
        backtrack,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn scenario_6_cycle_graph_two_sites() {
        // spec §8, scenario 6. Sites sit 3 apart on a 6-cycle, splitting
        // it into two length-3 arcs with no exact midpoint vertex, so
        // every vertex has a unique nearer site: 0,1,5 to site 0 and
        // 2,3,4 to site 3.
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)];
        let g = IndexedGraph::build(6, Direction::Undirected, &edges);
        let w = WeightFn::cardinality();
        let result = voronoi(&g, &w, &[0, 3]).unwrap();
        let cells: Vec<usize> = (0..6).map(|v| result.cell(v).unwrap()).collect();
        assert_eq!(cells, vec![0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn rejects_duplicate_sites() {
        let g = IndexedGraph::build(3, Direction::Undirected, &[(0, 1), (1, 2)]);
        let w = WeightFn::cardinality();
        assert_eq!(
            voronoi(&g, &w, &[0, 0]),
            Err(Error::DuplicateSite { site: 0 })
        );
    }

    #[test]
    fn unreachable_vertices_land_in_sentinel_cell() {
        let g = IndexedGraph::build(3, Direction::Directed, &[(0, 1)]);
        let w = WeightFn::cardinality();
        let result = voronoi(&g, &w, &[0]).unwrap();
        assert!(result.is_unreachable(2).unwrap());
        assert_eq!(result.cell(2).unwrap(), result.site_count());
    }
}
