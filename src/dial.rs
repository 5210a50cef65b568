//! [`DialQueue`]: bucket-indexed priority queue for non-negative
//! integer-weighted relaxation (spec §4.2.3).
//!
//! Generalizes the array-of-buckets idea from the same family as
//! `petgraph`'s `UnionFind` (`src/unionfind.rs`) style of dense,
//! index-addressed auxiliary structures, but implements the
//! doubly-linked bucket lists spec §4.1/§4.2.3 calls for explicitly,
//! since a `Vec`-per-bucket would make `decrease_key` linear in bucket
//! size.
pub struct DialQueue {
    /// `buckets[d]` is the head of the doubly-linked list of vertices
    /// currently tentatively at distance `d`, or `None`.
    buckets: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    /// Current bucket index of each vertex, if present.
    vertex_bucket: Vec<Option<usize>>,
    scan_idx: usize,
    len: usize,
}

impl DialQueue {
    /// A queue addressable for vertices `[0, n)`, with buckets
    /// pre-sized up to `max_distance_bound` (grows on demand past that
    /// if a larger distance is inserted).
    pub fn new(n: usize, max_distance_bound: u64) -> Self {
        DialQueue {
            buckets: vec![None; max_distance_bound as usize + 2],
            next: vec![None; n],
            prev: vec![None; n],
            vertex_bucket: vec![None; n],
            scan_idx: 0,
            len: 0,
        }
    }

    fn ensure_bucket(&mut self, d: usize) {
        if d >= self.buckets.len() {
            self.buckets.resize(d + 1, None);
        }
    }

    fn unlink(&mut self, v: usize, bucket: usize) {
        let p = self.prev[v];
        let nx = self.next[v];
        match p {
            Some(p) => self.next[p] = nx,
            None => self.buckets[bucket] = nx,
        }
        if let Some(nx) = nx {
            self.prev[nx] = p;
        }
        self.prev[v] = None;
        self.next[v] = None;
    }

    fn link_front(&mut self, v: usize, bucket: usize) {
        self.ensure_bucket(bucket);
        let old_head = self.buckets[bucket];
        self.next[v] = old_head;
        self.prev[v] = None;
        if let Some(h) = old_head {
            self.prev[h] = Some(v);
        }
        self.buckets[bucket] = Some(v);
        self.vertex_bucket[v] = Some(bucket);
    }

    /// Inserts `v` at bucket `d`. `v` must not already be present.
    pub fn insert(&mut self, v: usize, d: u64) {
        debug_assert!(self.vertex_bucket[v].is_none());
        self.link_front(v, d as usize);
        self.len += 1;
        self.scan_idx = self.scan_idx.min(d as usize);
    }

    /// Moves `v`, already present, to bucket `d`. `d` must not exceed
    /// its current bucket.
    pub fn decrease_key(&mut self, v: usize, d: u64) {
        let old = self.vertex_bucket[v].expect("vertex not in queue");
        self.unlink(v, old);
        self.link_front(v, d as usize);
        self.scan_idx = self.scan_idx.min(d as usize);
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertex_bucket[v].is_some()
    }

    pub fn key(&self, v: usize) -> Option<u64> {
        self.vertex_bucket[v].map(|b| b as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scans buckets from the monotonically non-decreasing cursor
    /// forward until a non-empty one is found, then pops its head.
    pub fn extract_min(&mut self) -> Option<(usize, u64)> {
        while self.scan_idx < self.buckets.len() && self.buckets[self.scan_idx].is_none() {
            self.scan_idx += 1;
        }
        if self.scan_idx >= self.buckets.len() {
            return None;
        }
        let v = self.buckets[self.scan_idx].unwrap();
        self.unlink(v, self.scan_idx);
        self.vertex_bucket[v] = None;
        self.len -= 1;
        Some((v, self.scan_idx as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_bucket_order() {
        let mut q = DialQueue::new(4, 10);
        q.insert(0, 5);
        q.insert(1, 2);
        q.insert(2, 2);
        q.insert(3, 8);
        let mut out = Vec::new();
        while let Some((v, d)) = q.extract_min() {
            out.push((v, d));
        }
        assert_eq!(out, vec![(1, 2), (2, 2), (0, 5), (3, 8)]);
    }

    #[test]
    fn decrease_key_moves_vertex_to_earlier_bucket() {
        let mut q = DialQueue::new(2, 10);
        q.insert(0, 7);
        q.insert(1, 3);
        q.decrease_key(0, 1);
        assert_eq!(q.extract_min(), Some((0, 1)));
        assert_eq!(q.extract_min(), Some((1, 3)));
    }

    #[test]
    fn grows_past_initial_bound() {
        let mut q = DialQueue::new(1, 2);
        q.insert(0, 50);
        assert_eq!(q.extract_min(), Some((0, 50)));
    }
}
