//! [`IndexedHeap`]: an addressable min-heap over vertex indices (spec §4.1).
//!
//! `petgraph`'s own Dijkstra (`src/algo/dijkstra.rs`) gets away with a
//! plain `BinaryHeap<MinScored<K, NodeId>>` (`src/scored.rs`) plus a
//! visited bitmap and lazy deletion: stale entries are pushed again on
//! every relax and skipped on pop. Spec §4.1 asks for a true
//! addressable heap with `decrease_key`/`contains`/`key` instead,
//! which the k-shortest-simple-paths replacement subroutine (spec
//! §4.6.3) needs in order to re-prioritize a vertex already in the
//! frontier by path-index tie-break rather than relying on lazy
//! deletion. This generalizes `MinScored`'s comparison (score first,
//! then an explicit secondary key so float scores still total-order)
//! into a binary layout with an explicit position array.
use core::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    key: K,
    secondary: i64,
    vertex: usize,
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

trait HeapKey: Copy {
    fn cmp_key(a: Self, b: Self) -> Ordering;
}

impl HeapKey for f64 {
    fn cmp_key(a: Self, b: Self) -> Ordering {
        cmp_f64(a, b)
    }
}

impl HeapKey for i64 {
    fn cmp_key(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }
}

/// An addressable binary min-heap keyed on vertex index `[0, n)`.
///
/// `K` is `f64` for real-weighted algorithms or `i64` for the integer
/// specializations (spec §4.1). Ties in the primary key are broken by
/// a caller-supplied secondary key (e.g. a path-index `xi` in the
/// fast-replacement subroutine); when no tie-break is needed, pass `0`
/// and insertion order effectively decides.
pub struct IndexedHeap<K: HeapKey> {
    entries: Vec<Entry<K>>,
    pos: Vec<Option<usize>>,
}

impl<K: HeapKey> IndexedHeap<K> {
    /// A heap with room to address vertices `[0, n)`, currently empty.
    pub fn new(n: usize) -> Self {
        IndexedHeap {
            entries: Vec::new(),
            pos: vec![None; n],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.pos[v].is_some()
    }

    pub fn key(&self, v: usize) -> Option<K> {
        self.pos[v].map(|i| self.entries[i].key)
    }

    /// The vertex with the smallest key and that key, without removing it.
    pub fn peek_min(&self) -> Option<(usize, K)> {
        self.entries.first().map(|e| (e.vertex, e.key))
    }

    fn order(&self, i: usize, j: usize) -> Ordering {
        let a = &self.entries[i];
        let b = &self.entries[j];
        K::cmp_key(a.key, b.key).then_with(|| a.secondary.cmp(&b.secondary))
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.pos[self.entries[i].vertex] = Some(i);
        self.pos[self.entries[j].vertex] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.order(i, parent) == Ordering::Less {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.entries.len() && self.order(left, smallest) == Ordering::Less {
                smallest = left;
            }
            if right < self.entries.len() && self.order(right, smallest) == Ordering::Less {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    /// Inserts `v` with the given key. `v` must not already be present.
    pub fn insert(&mut self, v: usize, key: K) {
        self.insert_with_tiebreak(v, key, 0);
    }

    /// As [`IndexedHeap::insert`], with an explicit secondary tie-break key.
    pub fn insert_with_tiebreak(&mut self, v: usize, key: K, secondary: i64) {
        debug_assert!(self.pos[v].is_none(), "vertex {v} already in heap");
        let i = self.entries.len();
        self.entries.push(Entry {
            key,
            secondary,
            vertex: v,
        });
        self.pos[v] = Some(i);
        self.sift_up(i);
    }

    /// Lowers the key of `v`, already in the heap, to `key`. `v` must
    /// already be present and `key` must not be greater than its
    /// current key.
    pub fn decrease_key(&mut self, v: usize, key: K) {
        self.decrease_key_with_tiebreak(v, key, 0);
    }

    /// As [`IndexedHeap::decrease_key`], with an explicit secondary tie-break key.
    pub fn decrease_key_with_tiebreak(&mut self, v: usize, key: K, secondary: i64) {
        let i = self.pos[v].expect("vertex not in heap");
        self.entries[i].key = key;
        self.entries[i].secondary = secondary;
        self.sift_up(i);
    }

    /// Inserts `v` if absent, or lowers its key if present and the new
    /// key is smaller. The common "relax" operation.
    pub fn push_or_decrease(&mut self, v: usize, key: K) -> bool
    where
        K: PartialOrd,
    {
        match self.pos[v] {
            None => {
                self.insert(v, key);
                true
            }
            Some(i) if K::cmp_key(key, self.entries[i].key) == Ordering::Less => {
                self.decrease_key(v, key);
                true
            }
            Some(_) => false,
        }
    }

    /// Removes and returns the vertex with the smallest key, along with
    /// that key.
    pub fn extract_min(&mut self) -> Option<(usize, K)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let popped = self.entries.pop().unwrap();
        self.pos[popped.vertex] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((popped.vertex, popped.key))
    }

    /// Removes every entry, keeping the addressable capacity.
    pub fn clear(&mut self) {
        for e in &self.entries {
            self.pos[e.vertex] = None;
        }
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_ascending_key_order() {
        let mut h: IndexedHeap<f64> = IndexedHeap::new(5);
        h.insert(0, 3.0);
        h.insert(1, 1.0);
        h.insert(2, 2.0);
        assert_eq!(h.extract_min(), Some((1, 1.0)));
        assert_eq!(h.extract_min(), Some((2, 2.0)));
        assert_eq!(h.extract_min(), Some((0, 3.0)));
        assert_eq!(h.extract_min(), None);
    }

    #[test]
    fn decrease_key_reprioritizes() {
        let mut h: IndexedHeap<i64> = IndexedHeap::new(3);
        h.insert(0, 10);
        h.insert(1, 20);
        h.decrease_key(1, 5);
        assert_eq!(h.extract_min(), Some((1, 5)));
        assert_eq!(h.extract_min(), Some((0, 10)));
    }

    #[test]
    fn push_or_decrease_ignores_worse_key() {
        let mut h: IndexedHeap<f64> = IndexedHeap::new(2);
        assert!(h.push_or_decrease(0, 5.0));
        assert!(!h.push_or_decrease(0, 7.0));
        assert!(h.push_or_decrease(0, 2.0));
        assert_eq!(h.key(0), Some(2.0));
    }

    #[test]
    fn tie_break_orders_by_secondary_key() {
        let mut h: IndexedHeap<f64> = IndexedHeap::new(2);
        h.insert_with_tiebreak(0, 1.0, 5);
        h.insert_with_tiebreak(1, 1.0, 2);
        assert_eq!(h.extract_min(), Some((1, 1.0)));
        assert_eq!(h.extract_min(), Some((0, 1.0)));
    }
}
