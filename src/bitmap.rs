//! Fixed-capacity bit-set (spec §2).
//!
//! A thin wrapper around `fixedbitset::FixedBitSet`, the same crate
//! `petgraph` uses for its `VisitMap` implementation
//! (`src/visit.rs`, `impl VisitMap<..> for FixedBitSet`). The wrapper
//! exists to give this crate's algorithms the exact set/clear/iterate
//! surface spec §2 names, without leaking `fixedbitset`'s own API
//! (block width, grow-on-demand) into the shortest-paths layer.
use fixedbitset::FixedBitSet;

/// A fixed-capacity bit-set over `[0, capacity)`.
#[derive(Clone, Debug)]
pub struct Bitmap {
    bits: FixedBitSet,
}

impl Bitmap {
    /// A bitmap of `capacity` bits, all clear.
    pub fn new(capacity: usize) -> Bitmap {
        Bitmap {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn set(&mut self, i: usize) {
        self.bits.insert(i);
    }

    pub fn clear_bit(&mut self, i: usize) {
        self.bits.set(i, false);
    }

    pub fn is_set(&self, i: usize) -> bool {
        self.bits.contains(i)
    }

    /// Clears every bit, without shrinking capacity.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Iterates the indices of set bits, in ascending order.
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    pub fn count_set(&self) -> usize {
        self.bits.count_ones(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear_and_iterate() {
        let mut b = Bitmap::new(8);
        b.set(1);
        b.set(4);
        b.set(7);
        assert!(b.is_set(4));
        assert!(!b.is_set(5));
        assert_eq!(b.iter_set().collect::<Vec<_>>(), vec![1, 4, 7]);
        b.clear_bit(4);
        assert_eq!(b.iter_set().collect::<Vec<_>>(), vec![1, 7]);
        assert_eq!(b.count_set(), 2);
        b.clear();
        assert_eq!(b.count_set(), 0);
    }
}
