use bitvec::prelude::*;

/// Fixed-capacity set of packed cell keys
///
/// Keys are `y * width + x` as produced by [`crate::spatial::GridMap::index_of`].
/// Membership is O(1) and iteration runs in ascending key order, which is
/// row-major scan order, so random picks over a set are reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    bits: BitVec,
    len: usize,
}

impl CellSet {
    /// Create an empty set able to hold keys below `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            len: 0,
        }
    }

    /// Insert a key, returning whether it was newly added
    ///
    /// Keys beyond the capacity are ignored.
    pub fn insert(&mut self, key: usize) -> bool {
        match self.bits.get_mut(key) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&mut self, key: usize) -> bool {
        match self.bits.get_mut(key) {
            Some(mut bit) if *bit => {
                bit.set(false);
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Test key membership
    pub fn contains(&self, key: usize) -> bool {
        self.bits.get(key).as_deref() == Some(&true)
    }

    /// Number of keys present
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Test if no keys are present
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keys in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The `n`-th smallest key
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }
}
